mod error;
mod job_schedulers;
mod lecture;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use job_schedulers::{ReminderScheduler, SchedulerError};
use lecture_reminder_infra::ReminderContext;
use std::net::TcpListener;
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    lecture::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: Arc<ReminderScheduler>,
}

impl Application {
    pub async fn new(context: ReminderContext) -> anyhow::Result<Self> {
        let (server, port) = Application::configure_server(context.clone())?;
        let scheduler = Arc::new(ReminderScheduler::new(context));
        scheduler.start().await?;

        Ok(Self {
            server,
            port,
            scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle to the reminder job, e.g. to stop it before the server exits
    pub fn scheduler(&self) -> Arc<ReminderScheduler> {
        self.scheduler.clone()
    }

    fn configure_server(context: ReminderContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves requests until the server shuts down, then stops the reminder job
    pub async fn start(self) -> anyhow::Result<()> {
        info!("Listening on port {}", self.port);
        let served = self.server.await;
        shutdown(&self.scheduler, served).await
    }
}

/// The reminder job is joined whether or not the server exited cleanly.
/// A server error takes precedence over a failure to stop the job.
async fn shutdown(
    scheduler: &ReminderScheduler,
    served: std::io::Result<()>,
) -> anyhow::Result<()> {
    let stopped = scheduler.stop().await;
    if let Err(e) = &stopped {
        error!("Unable to stop the reminder job: {:?}", e);
    }
    served?;
    stopped?;
    Ok(())
}
