//! # Course Service ライブラリ
//!
//! コースカタログ API のハンドラ・ユースケース・ルーター構築を公開する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、
//! 統合テストは [`app_builder::build_router`] でルーターを直接構築する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
