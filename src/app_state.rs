use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoComponentRepository, MongoExamAttemptRepository, MongoExamRepository,
        MongoPartnerRepository, MongoProjectRepository, MongoTeacherRepository,
    },
    services::{
        ComponentService, ExamScheduleService, PartnerService, ProjectService, SystemClock,
        TeacherService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub teacher_service: Arc<TeacherService>,
    pub partner_service: Arc<PartnerService>,
    pub project_service: Arc<ProjectService>,
    pub component_service: Arc<ComponentService>,
    pub exam_schedule_service: Arc<ExamScheduleService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let teacher_repository = Arc::new(MongoTeacherRepository::new(&db));
        teacher_repository.ensure_indexes().await?;
        let teacher_service = Arc::new(TeacherService::new(teacher_repository.clone()));

        let attempt_repository = Arc::new(MongoExamAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;
        let exam_repository = Arc::new(MongoExamRepository::new(&db));
        exam_repository.ensure_indexes().await?;
        let exam_schedule_service = Arc::new(ExamScheduleService::new(
            attempt_repository,
            exam_repository,
            teacher_repository,
            Arc::new(SystemClock),
        ));

        let partner_repository = Arc::new(MongoPartnerRepository::new(&db));
        partner_repository.ensure_indexes().await?;
        let partner_service = Arc::new(PartnerService::new(partner_repository));

        let project_repository = Arc::new(MongoProjectRepository::new(&db));
        project_repository.ensure_indexes().await?;
        let project_service = Arc::new(ProjectService::new(project_repository));

        let component_repository = Arc::new(MongoComponentRepository::new(&db));
        component_repository.ensure_indexes().await?;
        let component_service = Arc::new(ComponentService::new(component_repository));

        Ok(Self {
            teacher_service,
            partner_service,
            project_service,
            component_service,
            exam_schedule_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
