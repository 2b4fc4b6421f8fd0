// HTTP response utilities for HTML pages with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use tokio::io::AsyncReadExt;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// True when some `Accept-Encoding` entry names `br` with a non-zero quality
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT_ENCODING)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(','))
        .filter_map(|entry| {
            let mut params = entry.split(';');
            let coding = params.next()?.trim();
            coding.eq_ignore_ascii_case("br").then(|| quality(params))
        })
        .any(|q| q > 0.0)
}

/// `q` parameter of an entry; absent means 1, unparseable means refused
fn quality<'a>(params: impl Iterator<Item = &'a str>) -> f32 {
    match params
        .filter_map(|p| p.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
    {
        Some((_, value)) => value.trim().parse().unwrap_or(0.0),
        None => 1.0,
    }
}

/// Build a 200 HTML response, compressing the body when `compress` is set
pub async fn html_response(html: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    let html_bytes = html.into_bytes();

    let (body_bytes, content_encoding) = if compress {
        let mut encoder = BrotliEncoder::new(html_bytes.as_slice());
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            original = html_bytes.len(),
            compressed = compressed.len(),
            "compressed html body"
        );
        (compressed, Some("br"))
    } else {
        (html_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()))
        .header(header::VARY, "accept-encoding");

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
