//! Shared constants for the posting pipeline
//!

/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 800;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 600;

/// Alpha of the black layer drawn over the background, out of 255.
pub const OVERLAY_ALPHA: u8 = 100;

/// Maximum rendered width of a quote line.
pub const MAX_LINE_WIDTH: u32 = 700;
/// Row the quote block is vertically centered on.
pub const QUOTE_ANCHOR_Y: i32 = 250;
/// Vertical advance per quote line.
pub const QUOTE_LINE_HEIGHT: i32 = 50;
/// Gap between one text block and the next.
pub const BLOCK_GAP: i32 = 30;

/// Pixel sizes for each text block.
pub const QUOTE_FONT_SIZE: f32 = 36.0;
/// Author line size
pub const AUTHOR_FONT_SIZE: f32 = 24.0;
/// Translation line size
pub const TRANSLATION_FONT_SIZE: f32 = 20.0;

/// Default bold font for the quote
pub const DEFAULT_QUOTE_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
/// Default regular font for author and translation
pub const DEFAULT_BODY_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Gradient endpoints used when no photo is available.
pub const GRADIENT_TOP: [u8; 3] = [102, 126, 234];
/// Bottom end of the gradient
pub const GRADIENT_BOTTOM: [u8; 3] = [118, 75, 162];

/// Photo search topics, one is picked per run.
pub const BACKGROUND_TOPICS: [&str; 6] = [
    "nature landscape mountains",
    "ocean sunset beautiful",
    "forest peaceful serene",
    "sky clouds dramatic",
    "abstract geometric minimal",
    "vintage texture paper",
];

/// Maximum caption length accepted by the platform.
pub const CAPTION_LIMIT: usize = 280;
/// Hashtags appended to every caption.
pub const HASHTAGS: &str = "#名言 #格言 #inspiration #quote";

/// Author used when generated text carries no attribution.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Random quote API
pub const ZENQUOTES_URL: &str = "https://zenquotes.io/api/random";
/// Gemini REST base, the model and method are appended.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Unsplash random photo endpoint
pub const UNSPLASH_RANDOM_URL: &str = "https://api.unsplash.com/photos/random";
/// Twitter v1.1 media upload endpoint
pub const TWITTER_MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";
/// Twitter v2 post creation endpoint
pub const TWITTER_CREATE_TWEET_URL: &str = "https://api.twitter.com/2/tweets";

/// Prompt prefix used to translate an English quote into Japanese.
pub const TRANSLATION_PROMPT: &str = "以下の英語の名言を日本語に翻訳してください。\n\n";

/// Prompt templates for generating a quote directly, one is picked per run.
pub const GENERATION_PROMPTS: [&str; 4] = [
    "心に響く名言や格言を1つ生成してください。日本語で、作者名も含めて教えてください。形式は「名言内容」- 作者名 でお願いします。",
    "偉人の名言を1つ紹介してください。形式は「名言内容」- 作者名 でお願いします。説明は不要です。",
    "前向きな気持ちになれる格言を1つ教えてください。形式は「名言内容」- 作者名 でお願いします。",
    "人生や仕事について考えさせられる名言を1つ選んでください。形式は「名言内容」- 作者名 のみで答えてください。",
];

/// Canned quotes used whenever the remote sources fail: (text, author, translation).
pub const FALLBACK_QUOTES: [(&str, &str, &str); 3] = [
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
        "人生とは、他の計画を立てるのに忙しいときに起こるものだ。",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        "素晴らしい仕事をする唯一の方法は、自分のやっていることを愛することだ。",
    ),
    (
        "In three words I can sum up everything I've learned about life: it goes on.",
        "Robert Frost",
        "人生について学んだすべてを3つの言葉で要約できる。それは続くということだ。",
    ),
];
