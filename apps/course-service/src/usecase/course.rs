//! コース管理ユースケース

use std::sync::Arc;

use coursehub_domain::{
    DomainError,
    clock::Clock,
    course::{Course, CourseId, CourseName},
};
use coursehub_infra::repository::{CourseFilter, CourseRepository};

use crate::error::CourseServiceError;

/// コース作成の入力
///
/// `name` はリクエストボディに存在しない場合もあるため Option で受け、
/// 必須チェックはユースケース側で行う（欠落時に 422 ではなく
/// 400 のバリデーションエラーを返すため）。
pub struct CreateCourseInput {
    pub name: Option<String>,
}

/// コース更新の入力
pub struct UpdateCourseInput {
    pub id:   CourseId,
    pub name: Option<String>,
}

/// コース管理ユースケース
pub struct CourseUseCaseImpl {
    course_repository: Arc<dyn CourseRepository>,
    clock:             Arc<dyn Clock>,
}

impl CourseUseCaseImpl {
    pub fn new(course_repository: Arc<dyn CourseRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            course_repository,
            clock,
        }
    }

    /// 条件に一致するコース一覧を取得する
    ///
    /// 一致なしは空リストであり、エラーではない。
    pub async fn list_courses(
        &self,
        filter: CourseFilter,
    ) -> Result<Vec<Course>, CourseServiceError> {
        Ok(self.course_repository.find_all(&filter).await?)
    }

    /// ID でコースを取得する
    pub async fn get_course(&self, id: CourseId) -> Result<Course, CourseServiceError> {
        let course = self
            .course_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Course",
                id:          id.to_string(),
            })?;

        Ok(course)
    }

    /// コースを作成する
    ///
    /// 1. `name` の必須・文字数検証（欠落は空文字と同様に必須エラー）
    /// 2. ストアに挿入し、採番された ID を含むエンティティを返す
    pub async fn create_course(
        &self,
        input: CreateCourseInput,
    ) -> Result<Course, CourseServiceError> {
        let name = CourseName::new(input.name.unwrap_or_default())?;

        let now = self.clock.now();
        let course = self.course_repository.insert(&name, now).await?;

        Ok(course)
    }

    /// コースの名前を更新する
    ///
    /// PUT セマンティクス: `name` を常に置き換える。
    /// 存在確認をバリデーションより先に行うため、存在しない ID への
    /// リクエストは `name` の内容にかかわらず NotFound になる。
    pub async fn update_course(
        &self,
        input: UpdateCourseInput,
    ) -> Result<Course, CourseServiceError> {
        let course = self
            .course_repository
            .find_by_id(input.id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Course",
                id:          input.id.to_string(),
            })?;

        let name = CourseName::new(input.name.unwrap_or_default())?;

        let now = self.clock.now();
        let course = course.with_name(name, now);

        self.course_repository.update(&course).await?;

        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use coursehub_domain::clock::FixedClock;
    use coursehub_infra::mock::InMemoryCourseRepository;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    /// テスト用の固定タイムスタンプ
    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    /// インメモリリポジトリと固定時計で SUT を構築する
    fn build_usecase(now: DateTime<Utc>) -> (CourseUseCaseImpl, Arc<InMemoryCourseRepository>) {
        let repo = Arc::new(InMemoryCourseRepository::new());
        let usecase = CourseUseCaseImpl::new(
            repo.clone() as Arc<dyn CourseRepository>,
            Arc::new(FixedClock::new(now)) as Arc<dyn Clock>,
        );
        (usecase, repo)
    }

    #[rstest]
    #[tokio::test]
    async fn test_作成したコースをidで取得できる(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let created = sut
            .create_course(CreateCourseInput {
                name: Some("Rust 入門".to_string()),
            })
            .await
            .unwrap();

        let fetched = sut.get_course(created.id()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name().as_str(), "Rust 入門");
        assert_eq!(fetched.created_at(), now);
    }

    #[rstest]
    #[tokio::test]
    async fn test_作成ごとに異なるidが採番される(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let first = sut
            .create_course(CreateCourseInput {
                name: Some("Course 1".to_string()),
            })
            .await
            .unwrap();
        let second = sut
            .create_course(CreateCourseInput {
                name: Some("Course 2".to_string()),
            })
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[tokio::test]
    async fn test_nameなしの作成はバリデーションエラー(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let result = sut.create_course(CreateCourseInput { name: None }).await;

        let Err(CourseServiceError::Validation(msg)) = result else {
            panic!("expected validation error");
        };
        assert!(msg.contains("name"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_空文字nameの作成はバリデーションエラー(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let result = sut
            .create_course(CreateCourseInput {
                name: Some(String::new()),
            })
            .await;

        assert!(matches!(result, Err(CourseServiceError::Validation(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidの取得はnot_found(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let result = sut.get_course(CourseId::from_i64(999)).await;

        assert!(matches!(result, Err(CourseServiceError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_更新で名前が置き換わりストアに反映される(now: DateTime<Utc>) {
        let (sut, repo) = build_usecase(now);

        let created = sut
            .create_course(CreateCourseInput {
                name: Some("Old Course".to_string()),
            })
            .await
            .unwrap();

        let updated = sut
            .update_course(UpdateCourseInput {
                id:   created.id(),
                name: Some("Updated Course".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name().as_str(), "Updated Course");

        // ストアにも反映されている
        let stored = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "Updated Course");
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidの更新はnot_found(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let result = sut
            .update_course(UpdateCourseInput {
                id:   CourseId::from_i64(999),
                name: Some("Updated Course".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CourseServiceError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidの更新はnameが欠落していてもnot_found(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        // 存在確認がバリデーションより先に行われる
        let result = sut
            .update_course(UpdateCourseInput {
                id:   CourseId::from_i64(999),
                name: None,
            })
            .await;

        assert!(matches!(result, Err(CourseServiceError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在するidへのname欠落更新はバリデーションエラー(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let created = sut
            .create_course(CreateCourseInput {
                name: Some("Course 1".to_string()),
            })
            .await
            .unwrap();

        let result = sut
            .update_course(UpdateCourseInput {
                id:   created.id(),
                name: None,
            })
            .await;

        assert!(matches!(result, Err(CourseServiceError::Validation(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_一覧はid昇順で全件を返す(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        for name in ["Course 1", "Course 2", "Course 3"] {
            sut.create_course(CreateCourseInput {
                name: Some(name.to_string()),
            })
            .await
            .unwrap();
        }

        let courses = sut.list_courses(CourseFilter::default()).await.unwrap();

        assert_eq!(courses.len(), 3);
        let ids: Vec<i64> = courses.iter().map(|c| c.id().as_i64()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[rstest]
    #[tokio::test]
    async fn test_idフィルタは完全一致の1件のみ返す(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        let first = sut
            .create_course(CreateCourseInput {
                name: Some("Course 1".to_string()),
            })
            .await
            .unwrap();
        sut.create_course(CreateCourseInput {
            name: Some("Course 2".to_string()),
        })
        .await
        .unwrap();

        let courses = sut
            .list_courses(CourseFilter {
                id:   Some(first.id()),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id(), first.id());
    }

    #[rstest]
    #[tokio::test]
    async fn test_nameフィルタは大文字小文字を区別する(now: DateTime<Utc>) {
        let (sut, _) = build_usecase(now);

        sut.create_course(CreateCourseInput {
            name: Some("Course 2".to_string()),
        })
        .await
        .unwrap();

        let exact = sut
            .list_courses(CourseFilter {
                id:   None,
                name: Some("Course 2".to_string()),
            })
            .await
            .unwrap();
        let wrong_case = sut
            .list_courses(CourseFilter {
                id:   None,
                name: Some("course 2".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(exact.len(), 1);
        assert!(wrong_case.is_empty());
    }
}
