use super::domain::{classify_domain, Domain};
use super::plan::{GeneratedRoadmap, Milestone};
use super::survey::{self, SurveyResponses};
use super::templates::{domain_resources, templates_for, SkillTier};

const RAMEN_TITLES: [&str; 6] = [
    "Ramen Fundamentals",
    "Broth Mastery",
    "Noodle Perfection",
    "Toppings & Assembly",
    "Regional Styles",
    "Personal Signature",
];

/// 不依赖任何外部调用的模板路线图, 所有输入都有默认值, 永不失败
pub fn build_fallback_roadmap(
    goal_text: &str,
    timeline_days: u32,
    survey: Option<&SurveyResponses>,
) -> GeneratedRoadmap {
    let domain = classify_domain(goal_text);
    build_for_domain(goal_text, timeline_days, domain, survey)
}

/// 领域已知时 (例如 AI 分类之后) 直接按该领域生成
pub fn build_for_domain(
    goal_text: &str,
    timeline_days: u32,
    domain: Domain,
    survey: Option<&SurveyResponses>,
) -> GeneratedRoadmap {
    let time_per_day = survey.and_then(SurveyResponses::time_budget);
    let skill = survey.and_then(SurveyResponses::skill);

    let count = survey::milestone_count(timeline_days, time_per_day);
    let days_per_milestone = timeline_days as usize / count;

    let templates = templates_for(domain, SkillTier::from_skill(skill));
    let resources = domain_resources(domain);
    let ramen = domain == Domain::Cooking && goal_text.to_lowercase().contains("ramen");

    let milestones = (0..count)
        .map(|i| {
            let index = i.min(templates.titles.len() - 1);

            let title = match RAMEN_TITLES.get(i) {
                Some(ramen_title) if ramen => *ramen_title,
                _ => templates.titles[index],
            };

            Milestone {
                id: format!("milestone_{}", i + 1),
                day: (i * days_per_milestone + 1) as i32,
                title: title.to_string(),
                description: templates.descriptions[index].to_string(),
                tasks: templates.tasks[index].iter().map(|t| t.to_string()).collect(),
                resources: resources.clone(),
                completed: false,
            }
        })
        .collect();

    GeneratedRoadmap {
        domain,
        estimated_hours_total: survey::total_hours(time_per_day, timeline_days),
        difficulty_level: survey::difficulty_for(skill).to_string(),
        milestones,
    }
}
