// Outbound destinations for the cards and the footer credit.
pub const SCHEDULING_URL: &str = "https://form.respondi.app/EKUlJo3b";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/mateusmachadoprod/";

pub const WHATSAPP_PHONE: &str = "5527920016836";
pub const MENTORSHIP_MESSAGE: &str = "Olá, quero saber mais sobre a mentoria individual ";

// Animation timing in milliseconds.
pub const CONTENT_REVEAL_DELAY_MS: u32 = 600;
pub const SHAKE_DURATION_MS: u32 = 500;
