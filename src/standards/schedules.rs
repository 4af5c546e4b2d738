//! ASME B36.10M/B36.19M 배관 스케줄 목록.
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PipeSchedule {
    pub name: &'static str,
    pub description: &'static str,
}

/// 얇은 것부터 두꺼운 순서.
pub const PIPE_SCHEDULES: &[PipeSchedule] = &[
    sch("SCH 5S", "매우 얇음, 스테인리스강"),
    sch("SCH 10S", "얇음, 스테인리스강"),
    sch("SCH 10", "얇음, 저압"),
    sch("SCH 20", "중간, 특수 용도"),
    sch("SCH 30", "중간, 경부하"),
    sch("SCH 40", "표준, 가장 일반적"),
    sch("SCH 60", "두꺼움"),
    sch("SCH 80", "두꺼움(XS), 고압"),
    sch("SCH 100", "매우 두꺼움"),
    sch("SCH 120", "매우 두꺼움, 고압"),
    sch("SCH 140", "초후육"),
    sch("SCH 160", "초후육, 최고 압력"),
];

const fn sch(name: &'static str, description: &'static str) -> PipeSchedule {
    PipeSchedule { name, description }
}

/// "40", "sch40", "SCH 40" 모두 같은 스케줄로 찾는다.
pub fn find_schedule(name: &str) -> Option<&'static PipeSchedule> {
    let wanted = normalize(name);
    PIPE_SCHEDULES.iter().find(|s| normalize(s.name) == wanted)
}

fn normalize(name: &str) -> String {
    let compact: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    match compact.strip_prefix("SCH") {
        Some(rest) => rest.to_string(),
        None => compact,
    }
}
