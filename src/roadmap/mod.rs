//! 路线图生成: 领域分类 → 提示词/模板 → 模型调用 → 校验, 失败时模板兜底

pub mod domain;
pub mod fallback;
pub mod generator;
pub mod plan;
pub mod prompt;
pub mod survey;
pub mod templates;
pub mod validator;

pub use domain::{classify_domain, Domain};
pub use fallback::build_fallback_roadmap;
pub use generator::{GenerationOutcome, RoadmapGenerator, RoadmapSource};
pub use plan::{GeneratedRoadmap, Milestone};
pub use survey::SurveyResponses;
pub use validator::validate_roadmap;
