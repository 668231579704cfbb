//! # テスト用インメモリリポジトリ
//!
//! ユースケーステストや API テストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! coursehub-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID 採番は PostgreSQL の BIGSERIAL と同様に 1 始まりの連番で行い、
//! 「`id` は常にちょうど 1 件のコースを識別する」という不変条件を
//! インメモリでも保持する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coursehub_domain::course::{Course, CourseId, CourseName};

use crate::{
    error::InfraError,
    repository::{CourseFilter, CourseRepository},
};

/// インメモリ実装の CourseRepository
///
/// `Mutex` で書き込みを直列化し、採番カウンターと格納ベクタを
/// 同一ロックで保護する。テストごとに新しいインスタンスを作ることで、
/// テスト間の分離（元実装の per-test トランザクションに相当）を実現する。
#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    courses: Vec<Course>,
    next_id: i64,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// テストデータを直接投入する
    ///
    /// 採番カウンターを経由せず、指定された ID のままで格納する。
    /// API を経由しない初期状態の構築に使用する。
    pub fn add_course(&self, course: Course) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(course.id().as_i64());
        inner.courses.push(course);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, InfraError> {
        let inner = self.inner.lock().unwrap();
        let mut courses: Vec<Course> = inner
            .courses
            .iter()
            .filter(|c| filter.id.is_none_or(|id| c.id() == id))
            .filter(|c| {
                filter
                    .name
                    .as_deref()
                    .is_none_or(|name| c.name().as_str() == name)
            })
            .cloned()
            .collect();
        courses.sort_by_key(|c| c.id().as_i64());
        Ok(courses)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, InfraError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .courses
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn insert(&self, name: &CourseName, now: DateTime<Utc>) -> Result<Course, InfraError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let course = Course::from_db(CourseId::from_i64(inner.next_id), name.clone(), now, now);
        inner.courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, course: &Course) -> Result<(), InfraError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(pos) = inner.courses.iter().position(|c| c.id() == course.id()) {
            inner.courses[pos] = course.clone();
        }
        Ok(())
    }
}
