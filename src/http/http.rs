use std::borrow::Cow;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::types::{QueryMap, ScrapeResponse};

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.service(web::resource("/info").route(web::get().to(http_service_info)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one listener; the returned future runs it until the handle stops it.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let config = data.http_trackers_config.clone();
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => { return result; }
    };
    debug!("[HTTP] Request from {}: Announce", ip);

    let query_map = match http_service_query(&request) {
        Ok(result) => { result }
        Err(err) => { return err; }
    };

    match data.torrent_tracker.announce(ip, &query_map) {
        Ok(response) => {
            HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_service_announce_body(&response))
        }
        Err(error) => http_service_tracker_error(&error)
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => { return result; }
    };
    debug!("[HTTP] Request from {}: Scrape", ip);

    let query_map = match http_service_query(&request) {
        Ok(result) => { result }
        Err(err) => { return err; }
    };

    let scrape = data.torrent_tracker.scrape(&query_map);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(http_service_scrape_body(&scrape))
}

pub async fn http_service_stats(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    HttpResponse::Ok().json(data.torrent_tracker.get_stats())
}

pub async fn http_service_info(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    HttpResponse::Ok().json(data.torrent_tracker.snapshot())
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}

pub fn http_service_announce_body(response: &AnnounceResponse) -> Vec<u8>
{
    let mut peers_list = ben_list!();
    if let Some(peers_list_mut) = peers_list.list_mut() {
        for peer in response.peers.iter() {
            peers_list_mut.push(ben_map! {
                "ip" => ben_bytes!(peer.ip.to_string()),
                "port" => ben_int!(peer.port as i64)
            });
        }
    }
    ben_map! {
        "complete" => ben_int!(response.complete as i64),
        "incomplete" => ben_int!(response.incomplete as i64),
        "interval" => ben_int!(response.interval as i64),
        "peers" => peers_list
    }.encode()
}

/// Encodes scrape counters keyed by the raw 20-byte info-hash.
pub fn http_service_scrape_body(scrape: &ScrapeResponse) -> Vec<u8>
{
    let mut scrape_list = ben_map!();
    if let Some(scrape_list_mut) = scrape_list.dict_mut() {
        for (info_hash, counts) in scrape.iter() {
            scrape_list_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(counts.complete as i64),
                "downloaded" => ben_int!(counts.downloaded as i64),
                "incomplete" => ben_int!(counts.incomplete as i64)
            });
        }
    }
    scrape_list.encode()
}

pub fn http_service_tracker_error(error: &TrackerError) -> HttpResponse
{
    HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(ben_map! {
        "failure code" => ben_int!(error.code() as i64),
        "failure reason" => ben_bytes!(error.message())
    }.encode())
}

pub fn http_service_failure(reason: &str) -> HttpResponse
{
    HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!(reason.to_string())
    }.encode())
}

pub fn http_service_query(request: &HttpRequest) -> Result<QueryMap, HttpResponse>
{
    parse_query(Some(request.query_string().to_string()))
        .map_err(|error| http_service_failure(error.message()))
}

/// Caller address from the configured proxy header, or the socket peer.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => { return Err(()); }
        Some(addr) => { addr.ip() }
    };
    let real_ip = data.http_trackers_config.real_ip.as_str();
    if real_ip.is_empty() {
        return Ok(origin_ip);
    }
    match request.headers().get(real_ip) {
        None => Ok(origin_ip),
        Some(header) => {
            header.to_str().ok()
                .and_then(|value| IpAddr::from_str(value.trim()).ok())
                .ok_or(())
        }
    }
}

/// Resolves the caller to an IPv4 address, unwrapping IPv4-mapped IPv6.
pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<Ipv4Addr, HttpResponse>
{
    let ip = match http_service_retrieve_remote_ip(request, data) {
        Ok(ip) => ip,
        Err(()) => {
            data.torrent_tracker.update_stats(StatsEvent::RequestsRejected, 1);
            return Err(http_service_failure("unknown origin ip"));
        }
    };
    match ip {
        IpAddr::V4(ip) => Ok(ip),
        IpAddr::V6(ip) => match ip.to_ipv4_mapped() {
            Some(ip) => Ok(ip),
            None => {
                debug!("[HTTP] Rejecting IPv6 caller {}", ip);
                data.torrent_tracker.update_stats(StatsEvent::RequestsRejected, 1);
                Err(http_service_failure("ipv6 is not supported"))
            }
        }
    }
}
