use std::collections::HashSet;

use serde_json::Value;

use super::domain::Domain;
use super::plan::{GeneratedRoadmap, Milestone};

/// 把模型返回的松散 JSON 规整成标准路线图
///
/// 缺失字段补默认值; `completed` 一律置为 false.
pub fn validate_roadmap(candidate: &Value, domain: Domain, timeline_days: u32) -> GeneratedRoadmap {
    let candidates = candidate
        .get("milestones")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    // 空列表时避免除零
    let spacing = timeline_days as usize / candidates.len().max(1);
    let max_day = timeline_days.max(1) as i64;

    let mut seen = HashSet::new();
    let milestones = candidates
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let fallback_id = format!("milestone_{}", i + 1);
            let mut id = str_field(m, "id").unwrap_or_else(|| fallback_id.clone());
            if seen.contains(&id) {
                id = fallback_id;
                let mut n = 2;
                while seen.contains(&id) {
                    id = format!("milestone_{}_{}", i + 1, n);
                    n += 1;
                }
            }
            seen.insert(id.clone());

            let day = m
                .get("day")
                .and_then(Value::as_i64)
                .unwrap_or((i * spacing + 1) as i64)
                .clamp(1, max_day) as i32;

            Milestone {
                id,
                day,
                title: str_field(m, "title").unwrap_or_else(|| format!("Milestone {}", i + 1)),
                description: str_field(m, "description").unwrap_or_default(),
                tasks: string_list(m, "tasks"),
                resources: string_list(m, "resources"),
                completed: false,
            }
        })
        .collect();

    GeneratedRoadmap {
        domain: candidate
            .get("domain")
            .and_then(Value::as_str)
            .map(Domain::parse_or_general)
            .unwrap_or(domain),
        estimated_hours_total: candidate
            .get("estimated_hours_total")
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
            .map(|h| h.min(u32::MAX as u64) as u32)
            .unwrap_or(timeline_days.saturating_mul(2)),
        difficulty_level: str_field(candidate, "difficulty_level")
            .unwrap_or_else(|| "Beginner".to_string()),
        milestones,
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect()
        })
        .unwrap_or_default()
}
