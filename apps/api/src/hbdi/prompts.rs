// Prompt constants for the HBDI report endpoint.

use serde_json::Value;

use crate::hbdi::MetricSet;

/// System message sent ahead of every report prompt.
pub const HBDI_SYSTEM: &str = "You are an expert analyst of thinking preferences. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Write every value in formal Modern Standard Arabic.";

/// Report prompt template. Replace `{metrics_text}` before sending.
pub const HBDI_PROMPT_TEMPLATE: &str = r##"أنت خبير في تحليل أنماط التفكير والشخصية.

حقق المستخدم القيم التالية في المقاييس الثمانية (كل قيمة من 0 إلى 100):
{metrics_text}

حلّل هذه القيم وأعد تقريرًا بصيغة JSON فقط، مطابقًا تمامًا للهيكل التالي:
{
  "metrics": { "<اسم المقياس>": <القيمة كما وردت> },
  "dominant_quadrant": { "الربع المهيمن": "<اسم الربع>", "color": "<لون بصيغة #RRGGBB>" },
  "headline_description": { "title": "<عنوان قصير>", "description": "<وصف موجز للشخصية>" },
  "mind_mechanism": { "title": "<عنوان>", "description": "<كيف يعالج هذا العقل المعلومات ويتخذ القرارات>" },
  "key_capabilities": ["<قدرة>", "<قدرة>"],
  "unique_fingerprint": ["<سمة مميزة>", "<سمة مميزة>"],
  "detailed_personality_profile": {
    "thinking_style": "<أسلوب التفكير>",
    "work_style": "<أسلوب العمل>",
    "communication_style": "<أسلوب التواصل>",
    "decision_making": "<طريقة اتخاذ القرار>"
  },
  "unsuitable_environments": ["<بيئة غير مناسبة>", "<بيئة غير مناسبة>"],
  "recommended_careers": ["<مهنة>", "<مهنة>"],
  "core_strengths": { "<اسم المجال>": ["<نقطة قوة>", "<نقطة قوة>"] }
}

التعليمات:
- استخدم القيم لتحديد الربع المهيمن (dominant_quadrant)
- املأ كل الحقول الأخرى بناءً على الربع المهيمن والقيم
- أعد المقاييس نفسها وقيمها في الحقل metrics دون أي تعديل
- JSON يجب أن يكون جاهزًا للعرض مباشرة على صفحة التقرير
- لا تخرج عن الهيكل ولا تغيّر أسماء الحقول، ولا تكتب أي نص خارج JSON
- جميع النصوص بالعربية الفصحى وبأسلوب احترافي
- لا تذكر اسم HBDI أو Herrmann أو اسم أي نموذج قياس تجاري في أي حقل
"##;

/// Renders the report prompt for `metrics`, one `name: value` line per entry in arrival order.
pub fn render_prompt(metrics: &MetricSet) -> String {
    let metrics_text = metrics
        .iter()
        .map(|(name, value)| format!("{name}: {}", metric_value_text(value)))
        .collect::<Vec<_>>()
        .join("\n");

    HBDI_PROMPT_TEMPLATE.replace("{metrics_text}", &metrics_text)
}

// Strings go in verbatim; anything else as compact JSON.
fn metric_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
