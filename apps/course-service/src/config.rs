//! # Course Service 設定
//!
//! 環境変数から Course Service サーバーの設定を読み込む。

use std::env;

/// Course Service サーバーの設定
#[derive(Debug, Clone)]
pub struct CourseServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl CourseServiceConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 必須 | 説明 |
    /// |--------|------|------|
    /// | `COURSE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
    /// | `COURSE_PORT` | **Yes** | ポート番号 |
    /// | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("COURSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("COURSE_PORT")?
                .parse()
                .expect("COURSE_PORT は有効なポート番号である必要があります"),
            database_url: env::var("DATABASE_URL")?,
        })
    }
}
