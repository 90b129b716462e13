//! MongoDB 연결 관리 모듈
//!
//! 애플리케이션 시작 시 한 번 연결하고 `ServiceLocator`에 등록하여
//! `#[repository]` 매크로의 `db` 필드로 주입됩니다.

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

/// MongoDB 클라이언트와 사용할 데이터베이스 이름을 보관합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`, `DATABASE_NAME` 환경 변수로 연결하고 `ping`으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "storycut_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("storycut_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
