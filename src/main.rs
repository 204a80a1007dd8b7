// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! signin-shim CLI
//!
//! Drives the mock sign-in interceptor from the command line.

use std::env;
use std::process::ExitCode;

use signin_shim::auth::{decode_claims, ACCESS_TOKEN_TTL, DEFAULT_USERNAME};
use signin_shim::{
    ErrorContext, HttpClient, LoginInterceptor, OptionalScriptGuard, Request, RequestLogger,
    TokenIssuer,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("signin_shim=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "login" => {
            if args.len() < 4 {
                eprintln!("Usage: signin-shim login <username> <password> [base-url]");
                return ExitCode::from(1);
            }
            let base = args.get(4).map(String::as_str).unwrap_or(DEFAULT_BASE_URL);
            login(&args[2], &args[3], base).await
        }
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: signin-shim fetch <url>");
                return ExitCode::from(1);
            }
            fetch_url(&args[2]).await
        }
        "token" => {
            let username = args.get(2).map(String::as_str).unwrap_or(DEFAULT_USERNAME);
            print_token(username)
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("signin-shim {}", signin_shim::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"signin-shim - Mock sign-in interceptor

USAGE:
    signin-shim <COMMAND> [OPTIONS]

COMMANDS:
    login <user> <pass> [base-url]   Send a sign-in through the interceptor
    fetch <url>                      Fetch a URL through the interceptor chain
    token [username]                 Issue a mock access token and show its claims
    help                             Show this help message
    version                          Show version information

EXAMPLES:
    signin-shim login im ACK071675
    signin-shim login someone wrong https://app.example.com
    signin-shim fetch https://example.com/app.js
    signin-shim token im

Set RUST_LOG=signin_shim=debug for pass-through logging.
"#
    );
}

/// Client with the full interceptor stack installed
fn intercepting_client() -> signin_shim::Result<HttpClient> {
    Ok(HttpClient::new()?
        .with_interceptor(RequestLogger::default())
        .with_interceptor(LoginInterceptor::new())
        .with_interceptor(OptionalScriptGuard::new()))
}

async fn login(username: &str, password: &str, base: &str) -> ExitCode {
    let client = match intercepting_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    let url = format!("{}/api/sign-in", base.trim_end_matches('/'));
    let request = match Request::post(&url).and_then(|r| {
        r.json(&serde_json::json!({ "username": username, "password": password }))
    }) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to build request: {}", e);
            return ExitCode::from(1);
        }
    };

    match client.execute(request).await {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {} {}", response.status_code(), response.status_text());
            println!("Content-Type: {:?}", response.content_type());
            println!("{}", response.text_lossy());

            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("Sign-in failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn fetch_url(url: &str) -> ExitCode {
    println!("Fetching: {}", url);

    let client = match intercepting_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    match client.get(url).await {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.response_time_ms);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to fetch URL: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_token(username: &str) -> ExitCode {
    let now = chrono::Utc::now().timestamp();
    let token = match TokenIssuer::default()
        .issue(username, now, ACCESS_TOKEN_TTL)
        .context("issuing access token")
    {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    println!("{}", token);

    match decode_claims(token.as_str()).and_then(|c| Ok(serde_json::to_string_pretty(&c)?)) {
        Ok(claims) => {
            println!("\n=== Claims ===");
            println!("{}", claims);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to decode token: {}", e);
            ExitCode::from(1)
        }
    }
}
