use crate::cli::rt;
use course_core::app_ctx::AppContext;
use course_core::blueprint::Blueprint;
use course_core::courses::CourseDB;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct ServerConfig {
    pub app_ctx: Arc<AppContext>,
    pub course_db: Arc<RwLock<CourseDB>>,
}

impl ServerConfig {
    pub fn new(blueprint: Blueprint) -> Self {
        let course_db = CourseDB::init(blueprint.extensions.courses.clone());
        let app_ctx = AppContext {
            runtime: rt::init(),
            blueprint,
        };

        Self {
            app_ctx: Arc::new(app_ctx),
            course_db: Arc::new(RwLock::new(course_db)),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        (
            self.app_ctx.blueprint.server.hostname,
            self.app_ctx.blueprint.server.port,
        )
            .into()
    }
}
