use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{classify_domain, Domain};
use super::fallback::build_for_domain;
use super::plan::GeneratedRoadmap;
use super::prompt::{build_classification_prompt, build_roadmap_prompt};
use super::survey::SurveyResponses;
use super::validator::validate_roadmap;
use crate::llm::{CompletionOptions, LlmError, TextGenerator};

const ROADMAP_OPTIONS: CompletionOptions = CompletionOptions {
    max_tokens: 3500,
    temperature: 0.7,
};

/// 模型路线图可接受的里程碑数量
const MILESTONE_RANGE: std::ops::RangeInclusive<usize> = 2..=8;

const CLASSIFY_OPTIONS: CompletionOptions = CompletionOptions {
    max_tokens: 10,
    temperature: 0.1,
};

/// 一次生成尝试的结果. 除 `Generated` 以外都走模板兜底
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated(GeneratedRoadmap),
    NotConfigured,
    ParseFailure(String),
    CollaboratorFailure(LlmError),
}

/// 路线图来源, 便于日志和测试区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapSource {
    Ai,
    Fallback,
}

pub struct RoadmapGenerator {
    client: Option<Arc<dyn TextGenerator>>,
    ai_classification: bool,
}

impl RoadmapGenerator {
    pub fn new(client: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            client,
            ai_classification: false,
        }
    }

    /// 只用模板, 不做任何外部调用
    pub fn fallback_only() -> Self {
        Self::new(None)
    }

    pub fn with_ai_classification(mut self, enabled: bool) -> Self {
        self.ai_classification = enabled;
        self
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// 领域分类: 开启 AI 分类时先问模型, 任何失败都回落到关键词匹配
    pub async fn classify(&self, goal_text: &str) -> Domain {
        let client = match &self.client {
            Some(client) if self.ai_classification => client,
            _ => return classify_domain(goal_text),
        };

        match client
            .complete(&build_classification_prompt(goal_text), CLASSIFY_OPTIONS)
            .await
        {
            Ok(answer) => Domain::parse(&answer).unwrap_or_else(|| {
                warn!(answer = %answer, "Model returned an unknown domain, using keyword match");
                classify_domain(goal_text)
            }),
            Err(e) => {
                warn!(error = %e, "Domain classification failed, using keyword match");
                classify_domain(goal_text)
            }
        }
    }

    /// 总是返回可用的路线图
    pub async fn generate(
        &self,
        goal_text: &str,
        timeline_days: u32,
        survey: Option<&SurveyResponses>,
    ) -> (GeneratedRoadmap, RoadmapSource) {
        let domain = self.classify(goal_text).await;

        match self.attempt(goal_text, timeline_days, domain, survey).await {
            GenerationOutcome::Generated(roadmap) => {
                info!(
                    domain = %roadmap.domain,
                    milestones = roadmap.milestones.len(),
                    "Roadmap generated by model"
                );
                return (roadmap, RoadmapSource::Ai);
            }
            GenerationOutcome::NotConfigured => {
                debug!("Model not configured, using template roadmap");
            }
            GenerationOutcome::ParseFailure(reason) => {
                warn!(reason = %reason, "Model response unusable, using template roadmap");
            }
            GenerationOutcome::CollaboratorFailure(e) => {
                warn!(error = %e, "Model call failed, using template roadmap");
            }
        }

        let roadmap = build_for_domain(goal_text, timeline_days, domain, survey);
        (roadmap, RoadmapSource::Fallback)
    }

    /// 单次模型调用, 不重试
    pub async fn attempt(
        &self,
        goal_text: &str,
        timeline_days: u32,
        domain: Domain,
        survey: Option<&SurveyResponses>,
    ) -> GenerationOutcome {
        let Some(client) = &self.client else {
            return GenerationOutcome::NotConfigured;
        };

        let prompt = build_roadmap_prompt(goal_text, timeline_days, domain, survey);

        let content = match client.complete(&prompt, ROADMAP_OPTIONS).await {
            Ok(content) => content,
            Err(e) => return GenerationOutcome::CollaboratorFailure(e),
        };
        debug!(length = content.len(), "Model response received");

        let candidate: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => return GenerationOutcome::ParseFailure(e.to_string()),
        };
        if !candidate.is_object() {
            return GenerationOutcome::ParseFailure("response is not a JSON object".into());
        }

        let roadmap = validate_roadmap(&candidate, domain, timeline_days);
        if roadmap.milestones.is_empty() {
            return GenerationOutcome::ParseFailure("response contains no milestones".into());
        }
        if !MILESTONE_RANGE.contains(&roadmap.milestones.len()) {
            return GenerationOutcome::ParseFailure(format!(
                "response has {} milestones, expected {}-{}",
                roadmap.milestones.len(),
                MILESTONE_RANGE.start(),
                MILESTONE_RANGE.end()
            ));
        }

        GenerationOutcome::Generated(roadmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// 按顺序返回预设结果, 并记录收到的提示词
    struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, prompt: &str, _options: CompletionOptions) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                Err(LlmError::EmptyCompletion)
            } else {
                replies.remove(0)
            }
        }
    }

    fn generator(scripted: &Arc<ScriptedGenerator>) -> RoadmapGenerator {
        RoadmapGenerator::new(Some(scripted.clone() as Arc<dyn TextGenerator>))
    }

    #[tokio::test]
    async fn without_client_uses_fallback() {
        let generator = RoadmapGenerator::fallback_only();
        let (roadmap, source) = generator
            .generate("Learn to make ramen from scratch", 28, None)
            .await;

        assert_eq!(source, RoadmapSource::Fallback);
        assert_eq!(roadmap.domain, Domain::Cooking);
        assert_eq!(roadmap.milestones.len(), 4);
        assert!(!generator.is_ai_enabled());
    }

    #[tokio::test]
    async fn valid_response_is_validated() {
        let reply = json!({
            "domain": "cooking",
            "estimated_hours_total": 30,
            "difficulty_level": "Intermediate",
            "milestones": [
                { "id": "milestone_1", "day": 1, "title": "Broth", "tasks": ["Simmer bones"], "resources": ["Ivan Ramen"], "completed": true },
                { "title": "Noodles" }
            ]
        });
        let scripted = ScriptedGenerator::new(vec![Ok(reply.to_string())]);

        let (roadmap, source) = generator(&scripted).generate("ramen", 28, None).await;

        assert_eq!(source, RoadmapSource::Ai);
        assert_eq!(scripted.calls(), 1);
        assert_eq!(roadmap.milestones.len(), 2);
        assert!(!roadmap.milestones[0].completed);
        assert_eq!(roadmap.milestones[1].id, "milestone_2");
        assert_eq!(roadmap.milestones[1].day, 15);
    }

    #[tokio::test]
    async fn invalid_json_falls_back() {
        let scripted = ScriptedGenerator::new(vec![Ok("Sure! Here is your roadmap...".into())]);
        let outcome = generator(&scripted)
            .attempt("ramen", 28, Domain::Cooking, None)
            .await;
        assert!(matches!(outcome, GenerationOutcome::ParseFailure(_)));

        let scripted = ScriptedGenerator::new(vec![Ok("not json".into())]);
        let (roadmap, source) = generator(&scripted)
            .generate("Learn to make ramen from scratch", 28, None)
            .await;
        assert_eq!(source, RoadmapSource::Fallback);
        assert_eq!(scripted.calls(), 1);
        assert_eq!(roadmap.milestones[0].title, "Ramen Fundamentals");
    }

    #[tokio::test]
    async fn collaborator_error_falls_back_without_retry() {
        let scripted = ScriptedGenerator::new(vec![Err(LlmError::Api {
            status: 500,
            body: "boom".into(),
        })]);

        let (roadmap, source) = generator(&scripted).generate("Learn python", 21, None).await;

        assert_eq!(source, RoadmapSource::Fallback);
        assert_eq!(scripted.calls(), 1);
        assert_eq!(roadmap.domain, Domain::Programming);
        assert_eq!(roadmap.milestones.len(), 3);
    }

    #[tokio::test]
    async fn empty_milestone_list_falls_back() {
        let scripted = ScriptedGenerator::new(vec![Ok(json!({ "milestones": [] }).to_string())]);
        let (roadmap, source) = generator(&scripted).generate("Learn to paint", 14, None).await;

        assert_eq!(source, RoadmapSource::Fallback);
        assert!(!roadmap.milestones.is_empty());
    }

    #[tokio::test]
    async fn milestone_count_out_of_range_falls_back() {
        let one = json!({ "milestones": [{ "title": "only" }] });
        let scripted = ScriptedGenerator::new(vec![Ok(one.to_string())]);
        let outcome = generator(&scripted)
            .attempt("Learn to paint", 28, Domain::Art, None)
            .await;
        assert!(matches!(outcome, GenerationOutcome::ParseFailure(_)));

        let many: Vec<_> = (1..=20).map(|i| json!({ "title": format!("Step {i}") })).collect();
        let scripted = ScriptedGenerator::new(vec![Ok(json!({ "milestones": many }).to_string())]);
        let (roadmap, source) = generator(&scripted).generate("Learn to paint", 28, None).await;
        assert_eq!(source, RoadmapSource::Fallback);
        assert!((2..=8).contains(&roadmap.milestones.len()));

        let eight: Vec<_> = (1..=8).map(|i| json!({ "title": format!("Step {i}") })).collect();
        let scripted = ScriptedGenerator::new(vec![Ok(json!({ "milestones": eight }).to_string())]);
        let (roadmap, source) = generator(&scripted).generate("Learn to paint", 28, None).await;
        assert_eq!(source, RoadmapSource::Ai);
        assert_eq!(roadmap.milestones.len(), 8);
    }

    #[tokio::test]
    async fn ai_classification_falls_back_on_unknown_tag() {
        let scripted = ScriptedGenerator::new(vec![Ok("woodworking".into()), Ok("nope".into())]);
        let generator = generator(&scripted).with_ai_classification(true);

        let (roadmap, _) = generator.generate("Bake sourdough bread", 14, None).await;

        assert_eq!(scripted.calls(), 2);
        assert_eq!(roadmap.domain, Domain::Cooking);
    }

    #[tokio::test]
    async fn ai_classification_uses_model_answer() {
        let scripted = ScriptedGenerator::new(vec![Ok("Language".into())]);
        let generator = generator(&scripted).with_ai_classification(true);

        assert_eq!(generator.classify("Get better at chess").await, Domain::Language);
    }

    #[tokio::test]
    async fn keyword_classification_by_default() {
        let scripted = ScriptedGenerator::new(vec![]);
        assert_eq!(generator(&scripted).classify("gym routine").await, Domain::Fitness);
        assert_eq!(scripted.calls(), 0);
    }
}
