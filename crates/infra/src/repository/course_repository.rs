//! # CourseRepository
//!
//! コース情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストア採番**: `INSERT ... RETURNING id` で BIGSERIAL の採番結果を
//!   取得し、エンティティとして返す
//! - **等価フィルタ**: 一覧取得は `id` / `name` の完全一致のみ。部分一致や
//!   ページネーションは提供しない
//! - **安定順序**: 一覧は常に `id` 昇順で返す

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coursehub_domain::course::{Course, CourseId, CourseName};
use sqlx::PgPool;

use crate::error::InfraError;

/// コース一覧の絞り込み条件
///
/// 指定されたフィールドのみ完全一致で絞り込む。
/// 両方 `None` の場合は全件を返す。
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub id:   Option<CourseId>,
    pub name: Option<String>,
}

/// コースリポジトリトレイト
///
/// コースの一覧・取得・作成・更新を定義する。
/// 削除は API 契約に存在しないため定義しない。
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// 条件に一致するコースを `id` 昇順で取得する
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, InfraError>;

    /// ID でコースを検索する
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, InfraError>;

    /// コースを挿入する
    ///
    /// ID はストアが採番し、採番結果を含むエンティティを返す。
    async fn insert(&self, name: &CourseName, now: DateTime<Utc>) -> Result<Course, InfraError>;

    /// コースを更新する（名前、updated_at）
    async fn update(&self, course: &Course) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の CourseRepository
///
/// スキーマは `migrations/` の `courses` テーブルを前提とする。
#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// courses テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id:         i64,
    name:       String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CourseRow {
    /// 行をドメインエンティティに変換する
    ///
    /// ストア上の名前は書き込み時に検証済みのため、変換失敗は
    /// データ破損として予期しないエラーで返す。
    fn into_course(self) -> Result<Course, InfraError> {
        let name = CourseName::new(self.name)
            .map_err(|e| InfraError::unexpected(format!("不正なコース名がストアに存在: {e}")))?;

        Ok(Course::from_db(
            CourseId::from_i64(self.id),
            name,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, InfraError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM courses
            WHERE ($1::bigint IS NULL OR id = $1)
              AND ($2::text IS NULL OR name = $2)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.id.map(|id| id.as_i64()))
        .bind(filter.name.as_deref())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CourseRow::into_course).collect()
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, InfraError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CourseRow::into_course).transpose()
    }

    async fn insert(&self, name: &CourseName, now: DateTime<Utc>) -> Result<Course, InfraError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (name, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_course()
    }

    async fn update(&self, course: &Course) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE courses
            SET name = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(course.id().as_i64())
        .bind(course.name().as_str())
        .bind(course.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
