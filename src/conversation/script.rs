//! The fixed Arabic survey script.
//!
//! Every text the reporter ever sees lives here: prompts, re-prompts,
//! sentinels, and the final report layout. The conversation machine and the
//! report assembler only reference these; they never build reporter-facing
//! text themselves.

use crate::report::VotingRecord;

/// Welcome text sent on first contact and on every restart.
pub const WELCOME: &str = "🗳️ أهلاً وسهلاً بكم في نظام التصويت الذكي

هذا النظام سيساعدك في تسجيل معلومات التصويت بطريقة منظمة.

يرجى كتابة اسمك الثلاثي للبدء:";

pub const NAME_REPROMPT: &str = "يرجى إدخال الاسم الثلاثي كاملاً:";

pub const AREA_REPROMPT: &str = "يرجى إدخال اسم المنطقة:";

pub const VOTED_REPROMPT: &str = "يرجى الإجابة بـ \"نعم\" أو \"لا\" فقط:";

pub const COUNT_REPROMPT: &str = "يرجى إدخال رقم صحيح (مثال: 3 أو ٣):";

pub const REPORT_REPROMPT: &str = "يرجى كتابة شيء في التقرير:";

/// Shown for any message arriving after completion.
pub const RESTART_HINT: &str = "للبدء من جديد، اكتب \"بداية\"";

/// Stored as the report when the reporter answered "no" at the voted step.
pub const DID_NOT_VOTE: &str = "لم يقم بالتصويت";

/// Record default when a completed session carries no report text.
pub const NO_REPORT: &str = "لا يوجد تقرير";

/// Generic recovery message for any failed turn.
pub const APOLOGY: &str = "حدث خطأ، يرجى المحاولة مرة أخرى أو كتابة \"بداية\"";

pub fn name_saved(name: &str) -> String {
    format!(
        "تم حفظ الاسم: {name}

يرجى ادخال المنطقة:"
    )
}

pub fn area_saved(area: &str) -> String {
    format!(
        "تم حفظ المنطقة: {area}

يرجى ادخال المركز الانتخابي:"
    )
}

pub fn center_saved(center: &str) -> String {
    format!(
        "تم حفظ المركز: {center}

هل قمت بالتصويت؟

يرجى الإجابة بـ:
• نعم
• لا"
    )
}

pub const VOTED_YES_ACK: &str = "تم حفظ: نعم - قمت بالتصويت

كم عدد الأشخاص الذين صوتوا معك؟

يرجى كتابة العدد (مثال: 3 أو ٣):";

pub fn count_saved(count: u32) -> String {
    format!(
        "تم حفظ العدد: {count}

الآن يرجى كتابة تقرير مختصر عن عملية التصويت:
(مثال: تم التصويت في وقت مبكر، لا توجد مشاكل، الإقبال جيد)"
    )
}

pub fn report_saved(report: &str) -> String {
    format!(
        "تم حفظ التقرير: {report}

جاري إعداد التقرير النهائي..."
    )
}

/// Final summary echoing every collected field.
pub fn final_report(record: &VotingRecord) -> String {
    let voted = if record.has_voted {
        "✅ تم التصويت"
    } else {
        "❌ لم يتم التصويت"
    };

    format!(
        "📋 تقرير التصويت النهائي

👤 الاسم: {name}
📍 المنطقة: {area}
🏢 المركز الانتخابي: {center}
🗳️ حالة التصويت: {voted}
👥 عدد المصوتين معك: {count}
📝 التقرير: {report}
📅 تاريخ التسجيل: {recorded_at}

✅ تم حفظ بياناتك بنجاح!

شكراً لك على مشاركة هذه المعلومات المهمة.

{restart}",
        name = record.full_name,
        area = record.area_name,
        center = record.voting_center,
        count = record.voters_count,
        report = record.user_report,
        recorded_at = record.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"),
        restart = RESTART_HINT,
    )
}
