//! `weather` against a one-shot local HTTP server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use order::commands::weather::{self, FETCH_FAILED, PARSE_FAILED};
use order::{CliError, Config};

const BODY: &str = r#"{"current_condition":[{
    "FeelsLikeC":"9","FeelsLikeF":"48","humidity":"81","pressure":"1009",
    "temp_C":"11","temp_F":"52","weatherDesc":[{"value":"Light rain"}],
    "winddir16Point":"SW","windspeedKmph":"20","windspeedMiles":"12"}]}"#;

/// Serve one response and hand back the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });
    (base, handle)
}

fn config(base: String) -> Config {
    Config {
        weather_url: base,
        http_timeout: Duration::from_secs(5),
        ..Config::default()
    }
}

#[test]
fn fetches_and_formats_imperial_report() {
    let (base, server) = serve_once("200 OK", BODY);
    let lines = weather::run(&["New".into(), "York".into()], true, &config(base)).unwrap();

    assert_eq!(server.join().unwrap(), "GET /New%20York?format=j1 HTTP/1.1");
    assert_eq!(
        lines,
        vec![
            "Weather for New York:",
            "  Condition: Light rain",
            "  Temperature: 52°F",
            "  Feels like: 48°F",
            "  Wind: 12 mph SW",
            "  Humidity: 81%",
            "  Pressure: 1009 hPa",
        ]
    );
}

#[test]
fn default_city_is_requested() {
    let (base, server) = serve_once("200 OK", BODY);
    let lines = weather::run(&[], false, &config(base)).unwrap();
    assert_eq!(server.join().unwrap(), "GET /Los%20Angeles?format=j1 HTTP/1.1");
    assert_eq!(lines[2], "  Temperature: 11°C");
}

#[test]
fn server_error_is_a_fetch_failure() {
    let (base, server) = serve_once("503 Service Unavailable", "{}");
    let err = weather::run(&["Oslo".into()], false, &config(base)).unwrap_err();
    server.join().unwrap();
    assert_eq!(
        err.downcast_ref::<CliError>(),
        Some(&CliError::Failed(FETCH_FAILED.to_string()))
    );
}

#[test]
fn garbage_body_is_a_parse_failure() {
    let (base, server) = serve_once("200 OK", "Unknown location; please try ~1.2,3.4");
    let err = weather::run(&["Nowhere".into()], false, &config(base)).unwrap_err();
    server.join().unwrap();
    assert_eq!(
        err.downcast_ref::<CliError>(),
        Some(&CliError::Failed(PARSE_FAILED.to_string()))
    );
}

#[test]
fn unreachable_server_is_a_fetch_failure() {
    // Bind then drop so the port is very likely closed.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = weather::run(&[], false, &config(format!("http://{addr}"))).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CliError>(),
        Some(&CliError::Failed(FETCH_FAILED.to_string()))
    );
}
