//! Instruction text for each prompt branch, per locale.
//!
//! Length limits and tone rules are policy text for the model. Nothing here
//! is enforced locally. The praise text is free of digits so that it can
//! never be mistaken for carrying an hour.

use sleepcoach_config::PromptLocale;

/// Fixed phrases for one locale
#[derive(Debug)]
pub struct Phrases {
    /// Coach persona, wrapped in the instruct markers for urge prompts
    pub persona: &'static str,
    /// Whole praise prompt, one sentence per entry
    pub praise: &'static [&'static str],
    /// Line used when no usable time text was supplied
    pub time_missing: &'static str,
    /// Line used when no hour could be resolved
    pub hour_missing: &'static str,
    /// Tells the model not to make up the current time
    pub no_guessing: &'static str,
    /// Behavior when the hour is unknown
    pub unknown_time: &'static str,
    /// Tone, length, and format constraints closing every urge prompt
    pub style: &'static str,
}

const ZH: Phrases = Phrases {
    persona: "你是一个睡眠教练，通过对话帮助用户建立良好的睡眠习惯。",
    praise: &[
        "你是一个睡眠教练，任务是通过对话帮助用户改善睡眠习惯。",
        "用户决定现在就去睡觉。请积极鼓励用户的这个决定，称赞他们照顾自己健康的行为，并祝愿他们有个好梦。",
        "保持语气温暖、鼓励。回复要简短，不超过四十字；不使用Markdown或代码格式。",
        "重要：不要猜测、生成或提及任何具体时间。",
    ],
    time_missing: "用户未提供可解析的本地时间。",
    hour_missing: "无法解析具体小时。",
    no_guessing: "重要：不要猜测或生成未提供的当前时间；仅根据上面提供或解析到的时间判断。",
    unknown_time: "无法确定用户本地时间：温和询问用户现在是否准备睡觉，并提供通用、简短的睡前建议（不要猜测具体时刻）。",
    style: "其他要求：始终保持关心、支持的口吻；回复自然简短、不超过100字；不使用Markdown或代码格式；不要提供医学诊断或强制性指令。",
};

const EN: Phrases = Phrases {
    persona: "You are a sleep coach who helps the user build healthy sleep habits through conversation.",
    praise: &[
        "You are a sleep coach whose job is to help the user improve their sleep habits through conversation.",
        "The user has decided to go to bed right now. Warmly encourage this decision, praise them for looking after their health, and wish them sweet dreams.",
        "Keep the tone warm and encouraging. Reply in under forty words, with no Markdown or code formatting.",
        "Important: do not guess, invent, or mention any specific time.",
    ],
    time_missing: "The user did not provide a parseable local time.",
    hour_missing: "No specific hour could be determined.",
    no_guessing: "Important: do not guess or invent a current time that was not provided; rely only on the time given or parsed above.",
    unknown_time: "The user's local time is unknown: gently ask whether they are ready to sleep now and give brief, general bedtime advice (do not guess the exact time).",
    style: "Other requirements: always sound caring and supportive; keep the reply natural and short, at most 100 words; no Markdown or code formatting; no medical diagnosis or coercive instructions.",
};

/// Phrase table for a locale
pub fn phrases(locale: PromptLocale) -> &'static Phrases {
    match locale {
        PromptLocale::Zh => &ZH,
        PromptLocale::En => &EN,
    }
}

/// Wrap the persona in instruct markers
pub fn instruction_header(locale: PromptLocale) -> String {
    format!("<s>[INST]{}[/INST]</s>", phrases(locale).persona)
}

/// Echo of the supplied time text
pub fn time_line(locale: PromptLocale, display_time: &str) -> String {
    match locale {
        PromptLocale::Zh => format!("用户提供的本地时间：{display_time}。"),
        PromptLocale::En => format!("Local time provided by the user: {display_time}."),
    }
}

/// Echo of the resolved hour
pub fn hour_line(locale: PromptLocale, hour: u8) -> String {
    match locale {
        PromptLocale::Zh => format!("已解析的小时（24小时制）：{hour}。"),
        PromptLocale::En => format!("Parsed hour (24-hour clock): {hour}."),
    }
}

/// Past bedtime: firm but gentle push to bed with wind-down suggestions
pub fn urge_sleep(locale: PromptLocale, bedtime_hour: u8) -> String {
    match locale {
        PromptLocale::Zh => format!(
            "已过{bedtime_hour}:00：用温和但坚定的语气督促用户上床休息，避免责备，提供2–3条具体、易执行的放松建议（例如温和伸展、渐进性肌肉放松、4-4-8呼吸法）。"
        ),
        PromptLocale::En => format!(
            "It is past {bedtime_hour}:00: urge the user to go to bed in a gentle but firm tone, without blame, and give 2-3 concrete, easy wind-down suggestions (for example light stretching, progressive muscle relaxation, 4-4-8 breathing)."
        ),
    }
}

/// Before bedtime: ask whether the day is wrapped up and the routine can start
pub fn ask_readiness(locale: PromptLocale, bedtime_hour: u8) -> String {
    match locale {
        PromptLocale::Zh => format!(
            "未到{bedtime_hour}:00：用关心的语气询问白天的事情是否已完成？是否准备好进行睡前仪式？如果用户尚未完成，给1–2条可行的快速收尾建议，并给1–2条简单的睡前准备建议。"
        ),
        PromptLocale::En => format!(
            "It is not yet {bedtime_hour}:00: ask caringly whether the day's tasks are done and whether the user is ready to start a bedtime routine. If not, give 1-2 quick ways to wrap up and 1-2 simple bedtime preparation tips."
        ),
    }
}
