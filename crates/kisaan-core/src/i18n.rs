//! Localized text tables for Urdu and English.
//!
//! One table per page. Lookups are total: every page has text for every
//! [`Language`], so there is no missing-key fallback.

use crate::enums::Language;

/// Navigation bar labels.
#[derive(Debug)]
pub struct NavText {
    pub brand: &'static str,
    pub home: &'static str,
    pub learning: &'static str,
    pub market: &'static str,
    pub bot: &'static str,
    pub wiki: &'static str,
    pub tools: &'static str,
    pub language: &'static str,
}

const NAV_UR: NavText = NavText {
    brand: "Kisaan Academy",
    home: "ہوم",
    learning: "سیکھیں",
    market: "مارکیٹ",
    bot: "اگری بوٹ",
    wiki: "وکی",
    tools: "ٹولز",
    language: "Language",
};

const NAV_EN: NavText = NavText {
    brand: "Kisaan Academy",
    home: "Home",
    learning: "Learning",
    market: "Market",
    bot: "Agri-Bot",
    wiki: "Wiki",
    tools: "Tools",
    language: "زبان",
};

#[must_use]
pub const fn nav(language: Language) -> &'static NavText {
    match language {
        Language::Ur => &NAV_UR,
        Language::En => &NAV_EN,
    }
}

/// Home page: hero and recent alerts board.
#[derive(Debug)]
pub struct HomeText {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub recent_alerts: &'static str,
    pub weather: &'static str,
    pub pests: &'static str,
    pub no_alerts: &'static str,
    pub view_all: &'static str,
}

const HOME_UR: HomeText = HomeText {
    hero_title: "کسان اکیڈمی میں خوش آمدید",
    hero_subtitle: "کسانوں کو علم، اعداد و شمار، اور براہ راست مدد فراہم کرنے والا ایک جامع پلیٹ فارم",
    recent_alerts: "حالیہ الرٹس",
    weather: "موسم",
    pests: "کیڑے",
    no_alerts: "کوئی الرٹ نہیں",
    view_all: "سب دیکھیں",
};

const HOME_EN: HomeText = HomeText {
    hero_title: "Welcome to Kisaan Academy",
    hero_subtitle: "A comprehensive platform empowering farmers with knowledge, data, and direct support",
    recent_alerts: "Recent Alerts",
    weather: "Weather",
    pests: "Pests",
    no_alerts: "No alerts",
    view_all: "View All",
};

#[must_use]
pub const fn home(language: Language) -> &'static HomeText {
    match language {
        Language::Ur => &HOME_UR,
        Language::En => &HOME_EN,
    }
}

/// Learning hub: course list and detail.
#[derive(Debug)]
pub struct LearningText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all: &'static str,
    pub sustainable: &'static str,
    pub waste: &'static str,
    pub crop: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub no_courses: &'static str,
    pub loading: &'static str,
    pub watch_video: &'static str,
    pub back: &'static str,
}

const LEARNING_UR: LearningText = LearningText {
    title: "سیکھنے کا مرکز",
    subtitle: "جدید کھیتی باڑی کی تکنیکوں، پائیدار طریقوں، اور مالی خواندگی کے بارے میں سیکھیں",
    all: "تمام",
    sustainable: "پائیدار طریقے",
    waste: "فضلہ انتظام",
    crop: "فصل کا انتظام",
    category: "زمرہ",
    description: "تفصیل",
    no_courses: "کوئی کورس نہیں ملا",
    loading: "لوڈ ہو رہا ہے...",
    watch_video: "ویڈیو دیکھیں",
    back: "کورسز پر واپس",
};

const LEARNING_EN: LearningText = LearningText {
    title: "Learning Hub",
    subtitle: "Learn about modern farming techniques, sustainable practices, and financial literacy",
    all: "All",
    sustainable: "Sustainable Practices",
    waste: "Waste Management",
    crop: "Crop Management",
    category: "Category",
    description: "Description",
    no_courses: "No courses found",
    loading: "Loading...",
    watch_video: "Watch Video",
    back: "Back to Courses",
};

#[must_use]
pub const fn learning(language: Language) -> &'static LearningText {
    match language {
        Language::Ur => &LEARNING_UR,
        Language::En => &LEARNING_EN,
    }
}

/// Market intelligence: price table, chart and forecast.
#[derive(Debug)]
pub struct MarketText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all_regions: &'static str,
    pub live_prices: &'static str,
    pub crop: &'static str,
    pub region: &'static str,
    pub price: &'static str,
    pub mandi: &'static str,
    pub last_updated: &'static str,
    pub no_data: &'static str,
    pub loading: &'static str,
    pub forecast: &'static str,
    pub trend: &'static str,
}

const MARKET_UR: MarketText = MarketText {
    title: "مارکیٹ انٹیلی جنس",
    subtitle: "زندہ قیمتوں کا ٹریکر",
    all_regions: "تمام خطے",
    live_prices: "زندہ قیمتیں",
    crop: "فصل",
    region: "خطہ",
    price: "قیمت (فی کلو)",
    mandi: "منڈی",
    last_updated: "آخری اپ ڈیٹ",
    no_data: "کوئی ڈیٹا نہیں ملا",
    loading: "لوڈ ہو رہا ہے...",
    forecast: "پیش گوئی",
    trend: "رجحان",
};

const MARKET_EN: MarketText = MarketText {
    title: "Market Intelligence",
    subtitle: "Live price tracker",
    all_regions: "All Regions",
    live_prices: "Live Prices",
    crop: "Crop",
    region: "Region",
    price: "Price (per kg)",
    mandi: "Mandi",
    last_updated: "Last Updated",
    no_data: "No data found",
    loading: "Loading...",
    forecast: "Forecast",
    trend: "Trend",
};

#[must_use]
pub const fn market(language: Language) -> &'static MarketText {
    match language {
        Language::Ur => &MARKET_UR,
        Language::En => &MARKET_EN,
    }
}

/// Agri-Bot conversation and alert sidebar.
#[derive(Debug)]
pub struct BotText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub welcome: &'static str,
    pub fallback: &'static str,
    pub weather_alerts: &'static str,
    pub pest_alerts: &'static str,
    pub no_alerts: &'static str,
    pub loading: &'static str,
}

const BOT_UR: BotText = BotText {
    title: "اگری بوٹ",
    subtitle: "AI سے چلنے والا چیٹ بوٹ جو 24/7 آپ کے سوالات کے جوابات دیتا ہے",
    placeholder: "اپنا سوال یہاں لکھیں...",
    welcome: "السلام علیکم! میں آپ کا اگری بوٹ ہوں۔ آپ مجھ سے اپنی فصلوں، قیمتوں، موسم، اور کھیتی باڑی کے بارے میں کوئی بھی سوال پوچھ سکتے ہیں۔",
    fallback: "معافی، میں اس وقت آپ کے سوال کا جواب نہیں دے سکتا۔ براہ کرم دوبارہ کوشش کریں۔",
    weather_alerts: "موسم کی الرٹس",
    pest_alerts: "کیڑے کی الرٹس",
    no_alerts: "کوئی الرٹس نہیں",
    loading: "جواب آ رہا ہے...",
};

const BOT_EN: BotText = BotText {
    title: "Agri-Bot",
    subtitle: "AI-powered chatbot answering your questions 24/7",
    placeholder: "Type your question here...",
    welcome: "Hello! I am your Agri-Bot. You can ask me any questions about crops, prices, weather, and farming.",
    fallback: "Sorry, I cannot answer your question right now. Please try again.",
    weather_alerts: "Weather Alerts",
    pest_alerts: "Pest Alerts",
    no_alerts: "No alerts",
    loading: "Getting response...",
};

#[must_use]
pub const fn bot(language: Language) -> &'static BotText {
    match language {
        Language::Ur => &BOT_UR,
        Language::En => &BOT_EN,
    }
}

/// Sustainable practices wiki.
#[derive(Debug)]
pub struct WikiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all_categories: &'static str,
    pub waste_management: &'static str,
    pub resource_management: &'static str,
    pub back: &'static str,
    pub read_more: &'static str,
    pub tags: &'static str,
    pub no_articles: &'static str,
    pub loading: &'static str,
}

const WIKI_UR: WikiText = WikiText {
    title: "پائیدار طریقوں کی ویکی",
    subtitle: "پائیدار کھیتی باڑی اور وسائل کے انتظام کی عملی گائیڈز",
    all_categories: "تمام زمرے",
    waste_management: "فضلہ انتظام",
    resource_management: "وسائل کا انتظام",
    back: "ویکی پر واپس",
    read_more: "ویکیپیڈیا پر مزید پڑھیں",
    tags: "ٹیگز",
    no_articles: "کوئی مضمون نہیں ملا",
    loading: "لوڈ ہو رہا ہے...",
};

const WIKI_EN: WikiText = WikiText {
    title: "Sustainable Practices Wiki",
    subtitle: "Practical guides for sustainable farming and resource management",
    all_categories: "All Categories",
    waste_management: "Waste Management",
    resource_management: "Resource Management",
    back: "Back to Wiki",
    read_more: "Read More on Wikipedia",
    tags: "Tags",
    no_articles: "No articles found",
    loading: "Loading...",
};

#[must_use]
pub const fn wiki(language: Language) -> &'static WikiText {
    match language {
        Language::Ur => &WIKI_UR,
        Language::En => &WIKI_EN,
    }
}

/// Agricultural calculators.
#[derive(Debug)]
pub struct ToolsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub water_calculator: &'static str,
    pub fertilizer_calculator: &'static str,
    pub energy_optimization: &'static str,
    pub waste_management: &'static str,
    pub water_required: &'static str,
    pub fertilizer_required: &'static str,
    pub energy_saved: &'static str,
    pub waste_converted: &'static str,
    pub liters_per_week: &'static str,
    pub kg: &'static str,
    /// Unit abbreviation used inside detail lines.
    pub kg_short: &'static str,
    pub kwh: &'static str,
    pub compost: &'static str,
    pub biochar: &'static str,
    pub crop: &'static str,
    pub irrigation: &'static str,
    pub fertilizer_type: &'static str,
    pub cost_saved: &'static str,
    pub currency: &'static str,
    pub general: &'static str,
    pub invalid_area: &'static str,
    pub invalid_energy: &'static str,
    pub invalid_waste: &'static str,
}

const TOOLS_UR: ToolsText = ToolsText {
    title: "زرعی ٹولز",
    subtitle: "پانی، کھاد، توانائی، اور فضلہ انتظام کے لیے کیلکولیٹرز",
    water_calculator: "پانی کا کیلکولیٹر",
    fertilizer_calculator: "کھاد کا کیلکولیٹر",
    energy_optimization: "توانائی کی بہتری",
    waste_management: "فضلہ انتظام",
    water_required: "پانی کی ضرورت",
    fertilizer_required: "کھاد کی ضرورت",
    energy_saved: "توانائی کی بچت",
    waste_converted: "فضلہ تبدیل شدہ",
    liters_per_week: "لیٹر فی ہفتہ",
    kg: "کلوگرام",
    kg_short: "کلوگرام",
    kwh: "کلو واٹ گھنٹے",
    compost: "کمپوسٹ",
    biochar: "بائیوچار",
    crop: "فصل",
    irrigation: "اریگیشن",
    fertilizer_type: "کھاد کی قسم",
    cost_saved: "بچت شدہ رقم",
    currency: "روپے",
    general: "عام",
    invalid_area: "براہ کرم صحیح رقبہ درج کریں",
    invalid_energy: "براہ کرم توانائی کا استعمال درج کریں",
    invalid_waste: "براہ کرم فضلے کی مقدار درج کریں",
};

const TOOLS_EN: ToolsText = ToolsText {
    title: "Agricultural Tools",
    subtitle: "Calculators for water, fertilizer, energy, and waste management",
    water_calculator: "Water Calculator",
    fertilizer_calculator: "Fertilizer Calculator",
    energy_optimization: "Energy Optimization",
    waste_management: "Waste Management",
    water_required: "Water Required",
    fertilizer_required: "Fertilizer Required",
    energy_saved: "Energy Saved",
    waste_converted: "Waste Converted",
    liters_per_week: "Liters per week",
    kg: "Kilograms",
    kg_short: "kg",
    kwh: "KWh",
    compost: "Compost",
    biochar: "Biochar",
    crop: "Crop",
    irrigation: "Irrigation",
    fertilizer_type: "Fertilizer Type",
    cost_saved: "Cost Saved",
    currency: "₹",
    general: "General",
    invalid_area: "Please enter a valid area",
    invalid_energy: "Please enter energy usage",
    invalid_waste: "Please enter waste amount",
};

#[must_use]
pub const fn tools(language: Language) -> &'static ToolsText {
    match language {
        Language::Ur => &TOOLS_UR,
        Language::En => &TOOLS_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_distinct_page_titles() {
        assert_ne!(home(Language::Ur).hero_title, home(Language::En).hero_title);
        assert_ne!(tools(Language::Ur).title, tools(Language::En).title);
        assert_eq!(nav(Language::En).bot, "Agri-Bot");
    }

    #[test]
    fn fallback_messages_are_localized() {
        assert!(bot(Language::En).fallback.starts_with("Sorry"));
        assert!(!bot(Language::Ur).fallback.is_ascii());
    }
}
