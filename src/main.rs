// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! By default this runs the interactive TUI with the bundled walkway route
//! service on `http://127.0.0.1:<port>`.
//!
//! Use `--route-url` to point the board at an external route service instead,
//! or `--headless-service` to run only the route service.

use std::error::Error;
use std::sync::Arc;

const DEFAULT_SERVICE_PORT: u16 = 27436;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--campus <dir>]\n  {program} --route-url <url>\n  {program} --headless-service [--port <port>] [--campus <dir>]\n\nTUI mode (default) serves walkway routes at `http://127.0.0.1:<port>`.\n--port selects the service port (0 = ephemeral; default {DEFAULT_SERVICE_PORT}).\n\n--campus <dir> loads `buildings.tsv`/`paths.tsv` from a directory instead of\nthe built-in demo map.\n\n--route-url <url> skips the bundled service and uses an external one; it\ncannot be combined with --port, --campus, or --headless-service."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    route_url: Option<String>,
    port: Option<u16>,
    campus_dir: Option<String>,
    headless_service: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--route-url" => {
                if options.route_url.is_some() {
                    return Err(());
                }
                let url = args.next().ok_or(())?;
                options.route_url = Some(url);
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--campus" => {
                if options.campus_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.campus_dir = Some(dir);
            }
            "--headless-service" => {
                if options.headless_service {
                    return Err(());
                }
                options.headless_service = true;
            }
            _ => return Err(()),
        }
    }

    if options.route_url.is_some()
        && (options.port.is_some() || options.campus_dir.is_some() || options.headless_service)
    {
        return Err(());
    }

    Ok(options)
}

fn load_campus(options: &CliOptions) -> Result<triton::campus::CampusMap, Box<dyn Error>> {
    let Some(dir) = &options.campus_dir else {
        return Ok(triton::campus::demo_campus());
    };

    let dir = std::path::Path::new(dir);
    let buildings = std::fs::read_to_string(dir.join("buildings.tsv"))?;
    let paths = std::fs::read_to_string(dir.join("paths.tsv"))?;
    Ok(triton::campus::campus_from_tables(&buildings, &paths)?)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "triton".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let port = options.port.unwrap_or(DEFAULT_SERVICE_PORT);

        if options.headless_service {
            tracing_subscriber::fmt().init();
            let map = Arc::new(load_campus(&options)?);

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
                let addr = listener.local_addr()?;
                tracing::info!(%addr, "route service listening");
                // Headless mode serves until the process is killed.
                triton::service::serve(listener, map, std::future::pending()).await?;
                Ok::<(), Box<dyn Error>>(())
            })?;
            return Ok(());
        }

        if let Some(route_url) = options.route_url {
            let handle = runtime.handle().clone();
            // The runtime must keep running underneath the TUI so route
            // fetches spawned from it can resolve.
            runtime.block_on(async move {
                let client = triton::route::RouteClient::new(route_url)?;
                let directory = client.buildings().await.unwrap_or_default();

                let tui_join = tokio::task::spawn_blocking(move || {
                    triton::tui::run(client, handle, directory).map_err(|err| err.to_string())
                })
                .await;

                let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
                tui_result.map_err(|err| {
                    Box::new(std::io::Error::other(err)) as Box<dyn Error>
                })?;
                Ok::<(), Box<dyn Error>>(())
            })?;
            return Ok(());
        }

        let map = Arc::new(load_campus(&options)?);
        let handle = runtime.handle().clone();

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            let addr = listener.local_addr()?;

            let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
            let server_handle = tokio::spawn(triton::service::serve(listener, map, async move {
                let _ = shutdown_rx.await;
            }));

            let client = triton::route::RouteClient::new(format!("http://{addr}"))?;
            let directory = client.buildings().await.unwrap_or_default();

            let tui_join = tokio::task::spawn_blocking(move || {
                triton::tui::run(client, handle, directory).map_err(|err| err.to_string())
            })
            .await;

            let _ = shutdown_tx.send(());
            if let Ok(Err(err)) = server_handle.await {
                eprintln!("triton: route service error: {err}");
            }

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::other(err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("triton: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_port() {
        let options = parse_options(["--port".to_owned(), "1234".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.port, Some(1234));
        assert!(!options.headless_service);
    }

    #[test]
    fn parses_route_url() {
        let options =
            parse_options(["--route-url".to_owned(), "http://localhost:4567".to_owned()].into_iter())
                .expect("parse options");
        assert_eq!(options.route_url.as_deref(), Some("http://localhost:4567"));
    }

    #[test]
    fn parses_campus_dir_with_headless_service() {
        let options = parse_options(
            ["--headless-service".to_owned(), "--campus".to_owned(), "maps/uw".to_owned()]
                .into_iter(),
        )
        .expect("parse options");
        assert!(options.headless_service);
        assert_eq!(options.campus_dir.as_deref(), Some("maps/uw"));
    }

    #[test]
    fn rejects_route_url_with_bundled_service_flags() {
        parse_options(
            ["--route-url".to_owned(), "http://x".to_owned(), "--port".to_owned(), "1".to_owned()]
                .into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["--route-url".to_owned(), "http://x".to_owned(), "--headless-service".to_owned()]
                .into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["--route-url".to_owned(), "http://x".to_owned(), "--campus".to_owned(), ".".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["positional".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(
            ["--port".to_owned(), "1".to_owned(), "--port".to_owned(), "2".to_owned()].into_iter(),
        )
        .unwrap_err();

        parse_options(
            ["--headless-service".to_owned(), "--headless-service".to_owned()].into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_values() {
        parse_options(["--port".to_owned()].into_iter()).unwrap_err();
        parse_options(["--campus".to_owned()].into_iter()).unwrap_err();
        parse_options(["--route-url".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_non_numeric_port() {
        parse_options(["--port".to_owned(), "not-a-port".to_owned()].into_iter()).unwrap_err();
    }
}
