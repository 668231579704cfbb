//! # Course Service アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! テストは本物のルーティングそのままでリクエストを流せる。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{
    CourseState,
    create_course,
    get_course,
    health_check,
    list_courses,
    update_course,
};

/// ルーターを構築する
///
/// パスと HTTP メソッドの対応はここで明示的に定義する
/// （フレームワーク規約による暗黙のルーティングは行わない）。
///
/// 末尾スラッシュあり・なしは別ルートとして扱われるため、
/// 両形式を同じハンドラに登録してどちらのクライアントも受け付ける。
pub fn build_router(state: Arc<CourseState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/", get(list_courses).post(create_course))
        .route("/courses/{course_id}", get(get_course).put(update_course))
        .route("/courses/{course_id}/", get(get_course).put(update_course))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
