//! 发给大模型的提示词.
//!
//! 只做字符串拼接, 输入原样写入, 不做校验.

use super::domain::Domain;
use super::survey::{self, Interests, SurveyResponses};

const COOKING_INSTRUCTIONS: &str = r#"Focus on:
- Knife skills and kitchen safety
- Basic cooking techniques (sautéing, roasting, etc.)
- Understanding ingredients and flavors
- Recipe progression from simple to complex
- Kitchen equipment and organization

Suggest SPECIFIC resources like:
- Exact YouTube channels: "Joshua Weissman", "Bon Appétit", "Babish Culinary Universe"
- Specific cookbooks: "Salt Fat Acid Heat by Samin Nosrat"
- Cooking schools: "Rouxbe Online Culinary School"
- Equipment brands: "Victorinox knives", "Lodge cast iron""#;

const FITNESS_INSTRUCTIONS: &str = r#"Focus on:
- Proper form and injury prevention
- Progressive overload principles
- Nutrition fundamentals
- Rest and recovery
- Goal-specific training (strength, cardio, etc.)

Suggest SPECIFIC resources like:
- YouTube channels: "AthleanX", "Jeff Nippard", "Calisthenic Movement"
- Apps: "MyFitnessPal", "Strong (iOS)", "Jefit"
- Programs: "StrongLifts 5x5", "Starting Strength"
- Books: "Bigger Leaner Stronger by Michael Matthews""#;

const PROGRAMMING_INSTRUCTIONS: &str = r#"Focus on:
- Development environment setup
- Core programming concepts
- Hands-on project building
- Version control and best practices
- Problem-solving and debugging skills

Suggest SPECIFIC resources like:
- Platforms: "FreeCodeCamp", "The Odin Project", "Codecademy"
- YouTube channels: "Traversy Media", "Net Ninja", "Programming with Mosh"
- Documentation: "MDN Web Docs", "React official docs"
- Tools: "VS Code", "Git/GitHub", "Stack Overflow""#;

const LANGUAGE_INSTRUCTIONS: &str = r#"Focus on:
- Practical conversation skills
- Grammar fundamentals
- Vocabulary building strategies
- Cultural context and phrases
- Speaking and listening practice

Suggest SPECIFIC resources like:
- Apps: "Duolingo", "Babbel", "HelloTalk"
- YouTube channels: "SpanishDict", "Français avec Pierre"
- Websites: "conjuguemos.com", "News in Slow Spanish"
- Books: "Madrigal's Magic Key to Spanish Words""#;

const ART_INSTRUCTIONS: &str = r#"Focus on:
- Basic techniques and materials
- Fundamental principles (composition, color, etc.)
- Practice exercises and studies
- Style development and creativity
- Building a portfolio of work

Suggest SPECIFIC resources like:
- YouTube channels: "Proko", "Marco Bucci", "Sinix Design"
- Online courses: "Schoolism", "New Masters Academy"
- Books: "Drawing on the Right Side of the Brain by Betty Edwards"
- Software: "Photoshop", "Procreate", "Clip Studio Paint""#;

const GENERAL_INSTRUCTIONS: &str = r#"Focus on:
- Breaking down the goal into learnable components
- Building foundational knowledge first
- Practical application and practice
- Community and resource discovery
- Continuous improvement and adaptation

Always suggest SPECIFIC, real resources rather than generic ones."#;

const ADAPTATION_RULES: &str = r#"IMPORTANT: Adapt the roadmap intensity and content based on these preferences:
- For "Complete Beginner": Start with absolute basics, explain everything
- For "Advanced": Skip basics, focus on nuanced techniques and mastery
- For "15 minutes" daily: Create micro-learning sessions with quick wins
- For "2+ hours" daily: Include deep-dive sessions and complex projects
- For "Watch Videos" preference: Prioritize video resources and visual learning
- For "Hands-on Practice" preference: Focus on projects and practical exercises"#;

const RESOURCE_EXAMPLES: &str = r#"Example of good resources:
- "Joshua Weissman's Ramen series on YouTube"
- "Ivan Ramen cookbook by Ivan Orkin"
- "Ramen_Lord's comprehensive guide on Reddit r/ramen"
- "Kansui (alkaline mineral water) for noodle making""#;

pub fn domain_instructions(domain: Domain) -> &'static str {
    match domain {
        Domain::Cooking => COOKING_INSTRUCTIONS,
        Domain::Fitness => FITNESS_INSTRUCTIONS,
        Domain::Programming => PROGRAMMING_INSTRUCTIONS,
        Domain::Language => LANGUAGE_INSTRUCTIONS,
        Domain::Art => ART_INSTRUCTIONS,
        Domain::General => GENERAL_INSTRUCTIONS,
    }
}

/// 期望模型原样返回的 JSON 结构
pub fn schema_template(domain: Domain) -> String {
    format!(
        r#"{{
  "domain": "{domain}",
  "estimated_hours_total": <number>,
  "difficulty_level": "Beginner|Intermediate|Advanced",
  "milestones": [
    {{
      "id": "milestone_1",
      "day": <day_number>,
      "title": "<milestone_title>",
      "description": "<detailed_description>",
      "tasks": ["<specific_task1>", "<specific_task2>", "<specific_task3>"],
      "resources": ["<specific_resource1>", "<specific_resource2>", "<specific_resource3>"]
    }}
  ]
}}"#
    )
}

fn user_profile(survey: &SurveyResponses, timeline_days: u32) -> String {
    let mut profile = format!(
        "User Profile:\n\
         - Skill Level: {}\n\
         - Available Time: {} per day\n\
         - Learning Style: {}\n\
         - Timeline Preference: {}\n\
         - Estimated total hours available: {}\n",
        survey.skill_level.as_deref().unwrap_or("Beginner"),
        survey.time_per_day.as_deref().unwrap_or("30 minutes"),
        survey.learning_style.as_deref().unwrap_or("Mixed"),
        survey.timeline_preference.as_deref().unwrap_or("Flexible"),
        survey::total_hours(survey.time_budget(), timeline_days),
    );

    if let Some(interests) = survey.specific_interests.as_ref().map(Interests::to_text) {
        if !interests.is_empty() {
            profile.push_str(&format!("- Specific Interests: {interests}\n"));
        }
    }

    profile.push('\n');
    profile.push_str(ADAPTATION_RULES);
    profile
}

pub fn build_roadmap_prompt(
    goal_text: &str,
    timeline_days: u32,
    domain: Domain,
    survey: Option<&SurveyResponses>,
) -> String {
    let user_context = survey
        .map(|s| user_profile(s, timeline_days))
        .unwrap_or_default();
    let milestone_count =
        survey::milestone_count(timeline_days, survey.and_then(SurveyResponses::time_budget));

    format!(
        r#"Create a detailed {timeline_days}-day learning roadmap for: "{goal_text}"

{user_context}

Domain: {domain}
{instructions}

Requirements:
1. Create {milestone_count} milestones spread strategically across {timeline_days} days
2. Each milestone should build progressively on previous ones
3. Include specific, actionable tasks for each milestone
4. **CRITICAL: Provide SPECIFIC, HIGH-QUALITY resources for each milestone:**
   - Exact YouTube channel names (e.g., "Joshua Weissman", "Bon Appétit")
   - Specific online courses (e.g., "MasterClass: Gordon Ramsay Teaches Cooking")
   - Actual book titles and authors
   - Specific tools, apps, or websites
   - Real blogs, articles, or documentation
   - NO generic phrases like "YouTube tutorials" or "online courses"
5. Make it practical and realistic for the given timeline and user preferences
6. Adapt difficulty and pacing based on skill level and available time

{RESOURCE_EXAMPLES}

Respond with a JSON object in this exact format:
{schema}

Ensure the JSON is valid and complete. Focus on providing REAL, SPECIFIC resources that actually exist.
"#,
        instructions = domain_instructions(domain),
        schema = schema_template(domain),
    )
}

/// AI 辅助分类用的提示词, 只允许回答六个标签之一
pub fn build_classification_prompt(goal_text: &str) -> String {
    let tags: Vec<&str> = Domain::ALL.iter().map(Domain::as_str).collect();
    format!(
        "Classify this learning goal into one of these domains: {}\n\nGoal: \"{goal_text}\"\n\nRespond with only the domain name (lowercase).",
        tags.join(", ")
    )
}
