use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{Instrument, error, info, info_span};

use crate::config::Config;
use crate::http::connection::{Connection, ConnectionSettings};
use crate::http::static_files::StaticFiles;

/// Binds `cfg.server.listen_addr` and serves until the task is dropped.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Accept loop over an already bound listener.
///
/// Each accepted stream gets its own detached task. At most
/// `max_connections` handlers run at once; when the cap is reached the loop
/// waits for a handler to finish before accepting again. Accept failures are
/// logged and the loop carries on.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let files = Arc::new(StaticFiles::from_config(&cfg));
    let settings = ConnectionSettings::from_config(&cfg);
    let permits = Arc::new(Semaphore::new(cfg.server.max_connections.max(1)));

    loop {
        let permit = permits.clone().acquire_owned().await?;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Accepting connection failed");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let files = files.clone();
        let settings = settings.clone();
        tokio::spawn(
            async move {
                let conn = Connection::new(socket, files, settings);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
                drop(permit);
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
