use yew::prelude::*;

use crate::analytics;
use crate::config;

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Hi,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "en-in" => Some(Lang::En),
            "hi" | "hi-in" => Some(Lang::Hi),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Hi,
            Lang::Hi => Lang::En,
        }
    }

    /// The language's name written in its own script. The toggle button
    /// shows the *other* language's name, so this is what a visitor who
    /// wants to switch will actually read.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "हिन्दी",
        }
    }
}

/// Read the persisted preference. Absent or unrecognized values fall back
/// to English. This never writes to storage.
pub fn load_preference() -> Lang {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(config::LANGUAGE_STORAGE_KEY).ok())
        .flatten()
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or(Lang::En)
}

/// Persist the preference. Best-effort: storage may be unavailable
/// (private browsing, quota) and that must not break the toggle.
pub fn store_preference(lang: Lang) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(config::LANGUAGE_STORAGE_KEY, lang.code());
    }
}

/// Shared language state handed out through context.
#[derive(Clone, PartialEq)]
pub struct LangHandle {
    inner: UseStateHandle<Lang>,
}

impl LangHandle {
    pub fn current(&self) -> Lang {
        *self.inner
    }

    /// Flip the language, persist it, and report the switch.
    pub fn toggle(&self) {
        let next = self.current().other();
        store_preference(next);
        analytics::track("language_toggle", next.code());
        self.inner.set(next);
    }
}

#[derive(Properties, PartialEq)]
pub struct LangProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Installs the language context, loading the persisted preference once
/// at startup. Every bilingual component below re-renders on toggle, so
/// no element can be left showing the previous language.
#[function_component(LangProvider)]
pub fn lang_provider(props: &LangProviderProps) -> Html {
    let lang = use_state(load_preference);

    html! {
        <ContextProvider<LangHandle> context={LangHandle { inner: lang }}>
            { for props.children.iter() }
        </ContextProvider<LangHandle>>
    }
}

#[hook]
pub fn use_lang() -> LangHandle {
    // Fallback state keeps mis-ordered providers from panicking.
    let fallback = use_state(|| Lang::En);
    use_context::<LangHandle>().unwrap_or(LangHandle { inner: fallback })
}

/// Translate a key. Missing Hindi entries fall back to English; a key
/// missing everywhere renders as itself, which is also what the form
/// error builder relies on for unregistered field names.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav
        (Lang::En, "nav.courses") => "Courses".to_string(),
        (Lang::Hi, "nav.courses") => "पाठ्यक्रम".to_string(),
        (Lang::En, "nav.how") => "How It Works".to_string(),
        (Lang::Hi, "nav.how") => "कैसे काम करता है".to_string(),
        (Lang::En, "nav.contact") => "Contact".to_string(),
        (Lang::Hi, "nav.contact") => "संपर्क करें".to_string(),

        // Hero. The emphasized middle phrase keeps its highlight wrapper
        // in both languages.
        (Lang::En, "hero.title.pre") => "Learn skills that".to_string(),
        (Lang::Hi, "hero.title.pre") => "ऐसे कौशल सीखें जो".to_string(),
        (Lang::En, "hero.title.mark") => "get you hired".to_string(),
        (Lang::Hi, "hero.title.mark") => "आपको नौकरी दिलाएँ".to_string(),
        (Lang::En, "hero.title.post") => ".".to_string(),
        (Lang::Hi, "hero.title.post") => "।".to_string(),
        (Lang::En, "hero.subtitle") => {
            "Free, job-oriented training with placement support in your city.".to_string()
        }
        (Lang::Hi, "hero.subtitle") => {
            "आपके शहर में निःशुल्क, रोज़गारोन्मुखी प्रशिक्षण और प्लेसमेंट सहायता।".to_string()
        }
        (Lang::En, "hero.cta") => "Apply Now".to_string(),
        (Lang::Hi, "hero.cta") => "अभी आवेदन करें".to_string(),
        (Lang::En, "hero.cta.secondary") => "Browse courses".to_string(),
        (Lang::Hi, "hero.cta.secondary") => "पाठ्यक्रम देखें".to_string(),

        // Courses section
        (Lang::En, "courses.title") => "Popular Courses".to_string(),
        (Lang::Hi, "courses.title") => "लोकप्रिय पाठ्यक्रम".to_string(),
        (Lang::En, "course.electrician") => "Electrician".to_string(),
        (Lang::Hi, "course.electrician") => "इलेक्ट्रीशियन".to_string(),
        (Lang::En, "course.tailoring") => "Tailoring".to_string(),
        (Lang::Hi, "course.tailoring") => "सिलाई".to_string(),
        (Lang::En, "course.computer") => "Computer Basics".to_string(),
        (Lang::Hi, "course.computer") => "कंप्यूटर बेसिक्स".to_string(),
        (Lang::En, "course.retail") => "Retail & Sales".to_string(),
        (Lang::Hi, "course.retail") => "रिटेल और सेल्स".to_string(),
        (Lang::En, "courses.duration") => "3-month certificate program".to_string(),
        (Lang::Hi, "courses.duration") => "3 महीने का प्रमाणपत्र कार्यक्रम".to_string(),

        // Application form
        (Lang::En, "form.title") => "Apply for Training".to_string(),
        (Lang::Hi, "form.title") => "प्रशिक्षण के लिए आवेदन करें".to_string(),
        (Lang::En, "form.subtitle") => "Fill in your details and we will call you back.".to_string(),
        (Lang::Hi, "form.subtitle") => "अपना विवरण भरें, हम आपको कॉल करेंगे।".to_string(),
        (Lang::En, "form.name.label") => "Full Name".to_string(),
        (Lang::Hi, "form.name.label") => "पूरा नाम".to_string(),
        (Lang::En, "form.name.ph") => "Your full name".to_string(),
        (Lang::Hi, "form.name.ph") => "आपका पूरा नाम".to_string(),
        (Lang::En, "form.email.label") => "Email Address".to_string(),
        (Lang::Hi, "form.email.label") => "ईमेल पता".to_string(),
        (Lang::En, "form.email.ph") => "you@example.com".to_string(),
        (Lang::Hi, "form.email.ph") => "aap@example.com".to_string(),
        (Lang::En, "form.phone.label") => "Phone Number".to_string(),
        (Lang::Hi, "form.phone.label") => "फ़ोन नंबर".to_string(),
        (Lang::En, "form.phone.ph") => "10-digit mobile number".to_string(),
        (Lang::Hi, "form.phone.ph") => "10 अंकों का मोबाइल नंबर".to_string(),
        (Lang::En, "form.course.label") => "Preferred Course".to_string(),
        (Lang::Hi, "form.course.label") => "पसंदीदा पाठ्यक्रम".to_string(),
        (Lang::En, "form.course.ph") => "Select a course".to_string(),
        (Lang::Hi, "form.course.ph") => "पाठ्यक्रम चुनें".to_string(),
        (Lang::En, "form.mode.label") => "Training Mode".to_string(),
        (Lang::Hi, "form.mode.label") => "प्रशिक्षण का माध्यम".to_string(),
        (Lang::En, "form.mode.classroom") => "Classroom".to_string(),
        (Lang::Hi, "form.mode.classroom") => "कक्षा में".to_string(),
        (Lang::En, "form.mode.online") => "Online".to_string(),
        (Lang::Hi, "form.mode.online") => "ऑनलाइन".to_string(),
        (Lang::En, "form.message.label") => "Anything else? (optional)".to_string(),
        (Lang::Hi, "form.message.label") => "कुछ और? (वैकल्पिक)".to_string(),
        (Lang::En, "form.message.ph") => "Questions, preferred timings...".to_string(),
        (Lang::Hi, "form.message.ph") => "प्रश्न, पसंदीदा समय...".to_string(),
        (Lang::En, "form.submit") => "Submit Application".to_string(),
        (Lang::Hi, "form.submit") => "आवेदन जमा करें".to_string(),
        (Lang::En, "form.retry") => "Try Again".to_string(),
        (Lang::Hi, "form.retry") => "पुनः प्रयास करें".to_string(),

        // Field display names, used when building validation messages.
        (Lang::En, "field.name") => "Full Name".to_string(),
        (Lang::Hi, "field.name") => "पूरा नाम".to_string(),
        (Lang::En, "field.email") => "Email Address".to_string(),
        (Lang::Hi, "field.email") => "ईमेल पता".to_string(),
        (Lang::En, "field.phone") => "Phone Number".to_string(),
        (Lang::Hi, "field.phone") => "फ़ोन नंबर".to_string(),
        (Lang::En, "field.course") => "Preferred Course".to_string(),
        (Lang::Hi, "field.course") => "पसंदीदा पाठ्यक्रम".to_string(),
        (Lang::En, "field.mode") => "Training Mode".to_string(),
        (Lang::Hi, "field.mode") => "प्रशिक्षण का माध्यम".to_string(),
        (Lang::En, "validation.suffix") => "is required or invalid.".to_string(),
        (Lang::Hi, "validation.suffix") => "आवश्यक है या अमान्य है।".to_string(),

        // Feedback
        (Lang::En, "loader.submitting") => "Submitting your application...".to_string(),
        (Lang::Hi, "loader.submitting") => "आपका आवेदन जमा हो रहा है...".to_string(),
        (Lang::En, "notify.invalid.title") => "Please check the form".to_string(),
        (Lang::Hi, "notify.invalid.title") => "कृपया फ़ॉर्म जाँचें".to_string(),
        (Lang::En, "notify.success.title") => "Application received!".to_string(),
        (Lang::Hi, "notify.success.title") => "आवेदन प्राप्त हुआ!".to_string(),
        (Lang::En, "notify.success.body") => {
            "Thank you for applying. Our team will call you within 2 working days.".to_string()
        }
        (Lang::Hi, "notify.success.body") => {
            "आवेदन के लिए धन्यवाद। हमारी टीम 2 कार्य दिवसों में आपको कॉल करेगी।".to_string()
        }
        (Lang::En, "notify.failed.title") => "Submission failed".to_string(),
        (Lang::Hi, "notify.failed.title") => "आवेदन जमा नहीं हुआ".to_string(),
        (Lang::En, "notify.failed.body") => {
            "Something went wrong. Your details are still here, please try again.".to_string()
        }
        (Lang::Hi, "notify.failed.body") => {
            "कुछ गड़बड़ हो गई। आपका विवरण सुरक्षित है, कृपया पुनः प्रयास करें।".to_string()
        }

        // Footer
        (Lang::En, "footer.tagline") => "Skills today, jobs tomorrow.".to_string(),
        (Lang::Hi, "footer.tagline") => "आज कौशल, कल रोज़गार।".to_string(),

        // Fallback: English string if present, else the key itself.
        (Lang::Hi, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        assert_eq!(Lang::from_code(Lang::En.code()), Some(Lang::En));
        assert_eq!(Lang::from_code(Lang::Hi.code()), Some(Lang::Hi));
    }

    #[test]
    fn regional_variants_resolve() {
        assert_eq!(Lang::from_code("en-IN"), Some(Lang::En));
        assert_eq!(Lang::from_code("hi-IN"), Some(Lang::Hi));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn other_flips_both_ways() {
        assert_eq!(Lang::En.other(), Lang::Hi);
        assert_eq!(Lang::Hi.other(), Lang::En);
        assert_eq!(Lang::En.other().other(), Lang::En);
    }

    #[test]
    fn toggle_button_advertises_target_language() {
        // Visitor reading English is offered Hindi in Devanagari.
        assert_eq!(Lang::En.other().native_name(), "हिन्दी");
        assert_eq!(Lang::Hi.other().native_name(), "English");
    }

    #[test]
    fn translations_exist_for_both_languages() {
        assert_eq!(t(Lang::En, "hero.cta"), "Apply Now");
        assert_ne!(t(Lang::Hi, "hero.cta"), t(Lang::En, "hero.cta"));
    }

    #[test]
    fn missing_key_falls_back_to_itself() {
        assert_eq!(t(Lang::En, "no.such.key"), "no.such.key");
        assert_eq!(t(Lang::Hi, "no.such.key"), "no.such.key");
    }
}
