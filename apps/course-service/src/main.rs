//! # Course Service サーバー
//!
//! コースカタログの CRUD API を提供するサービス。
//!
//! ## 役割
//!
//! - **コース管理**: 一覧・取得・作成・更新（削除は API 契約に存在しない）
//! - **データ永続化**: PostgreSQL への保存（ID は BIGSERIAL で採番）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `COURSE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `COURSE_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p coursehub-course-service
//!
//! # 本番環境
//! COURSE_PORT=3001 DATABASE_URL=postgres://... \
//!     cargo run -p coursehub-course-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use coursehub_course_service::{
    app_builder::build_router,
    config::CourseServiceConfig,
    handler::CourseState,
    usecase::CourseUseCaseImpl,
};
use coursehub_domain::clock::{Clock, SystemClock};
use coursehub_infra::{
    db,
    repository::{CourseRepository, PostgresCourseRepository},
};
use coursehub_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Course Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("course-service"));

    // 設定読み込み
    let config = CourseServiceConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Course Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let course_repository =
        Arc::new(PostgresCourseRepository::new(pool)) as Arc<dyn CourseRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;
    let usecase = CourseUseCaseImpl::new(course_repository, clock);
    let state = Arc::new(CourseState { usecase });

    // ルーター構築
    let app = build_router(state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Course Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
