//! # コースハンドラ
//!
//! コースカタログの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /courses` - コース一覧（`id` / `name` クエリで完全一致フィルタ）
//! - `GET /courses/{course_id}` - コース詳細
//! - `POST /courses` - コース作成
//! - `PUT /courses/{course_id}` - コース名更新
//!
//! ## ワイヤ表現
//!
//! コースの JSON 表現は `{"id": int, "name": string}` のみ。
//! タイムスタンプは内部管理でありレスポンスには含めない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use coursehub_domain::course::{Course, CourseId};
use coursehub_infra::repository::CourseFilter;
use serde::{Deserialize, Serialize};

use crate::{
    error::CourseServiceError,
    usecase::course::{CourseUseCaseImpl, CreateCourseInput, UpdateCourseInput},
};

/// コース API の共有状態
pub struct CourseState {
    pub usecase: CourseUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// コース DTO
#[derive(Debug, Serialize)]
pub struct CourseDto {
    pub id:   i64,
    pub name: String,
}

impl CourseDto {
    fn from_course(course: &Course) -> Self {
        Self {
            id:   course.id().as_i64(),
            name: course.name().as_str().to_string(),
        }
    }
}

/// 一覧取得のクエリパラメータ（完全一致フィルタ）
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub id:   Option<i64>,
    pub name: Option<String>,
}

/// コース作成リクエスト
///
/// `name` の欠落はデシリアライズエラーではなく
/// バリデーションエラー（400）として扱うため Option で受ける。
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: Option<String>,
}

/// コース更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
}

// --- ハンドラ ---

/// GET /courses
///
/// 条件に一致するコース一覧を `id` 昇順の JSON 配列で返す。
/// 一致なしは `[]`（200）。
pub async fn list_courses(
    State(state): State<Arc<CourseState>>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<impl IntoResponse, CourseServiceError> {
    let filter = CourseFilter {
        id:   query.id.map(CourseId::from_i64),
        name: query.name,
    };

    let courses = state.usecase.list_courses(filter).await?;

    let items: Vec<CourseDto> = courses.iter().map(CourseDto::from_course).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /courses/{course_id}
///
/// ## レスポンス
///
/// - `200 OK`: コース
/// - `404 Not Found`: コースが見つからない
pub async fn get_course(
    State(state): State<Arc<CourseState>>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, CourseServiceError> {
    let course = state
        .usecase
        .get_course(CourseId::from_i64(course_id))
        .await?;

    Ok((StatusCode::OK, Json(CourseDto::from_course(&course))))
}

/// POST /courses
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む作成済みコース
/// - `400 Bad Request`: `name` 欠落・空・文字数超過
pub async fn create_course(
    State(state): State<Arc<CourseState>>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, CourseServiceError> {
    let course = state
        .usecase
        .create_course(CreateCourseInput { name: req.name })
        .await?;

    Ok((StatusCode::CREATED, Json(CourseDto::from_course(&course))))
}

/// PUT /courses/{course_id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のコース
/// - `400 Bad Request`: `name` 欠落・空・文字数超過
/// - `404 Not Found`: コースが見つからない
pub async fn update_course(
    State(state): State<Arc<CourseState>>,
    Path(course_id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, CourseServiceError> {
    let course = state
        .usecase
        .update_course(UpdateCourseInput {
            id:   CourseId::from_i64(course_id),
            name: req.name,
        })
        .await?;

    Ok((StatusCode::OK, Json(CourseDto::from_course(&course))))
}
