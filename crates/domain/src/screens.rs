//! Static conversation screens
//!
//! Every screen renders to a fixed HTML body and a fixed keyboard. Only the
//! payment detail screen is parameterized, by the selected bundle.

use crate::commands::actions;
use crate::entities::{Bundle, CATALOG};
use crate::errors::DomainError;
use crate::value_objects::{Button, InlineKeyboard};

/// Telegram handle of the support operator
pub const SUPPORT_HANDLE: &str = "@bitcoin_user1";

/// Direct chat link to the support operator
pub const SUPPORT_URL: &str = "https://t.me/bitcoin_user1";

const BUY_LABEL: &str = "🛒 Купить UC";
const SUPPORT_LABEL: &str = "💬 Поддержка";

const WELCOME_TEXT: &str = "🎮 <b>Добро пожаловать в PUBG UC Store!</b>\n\n\
    Здесь вы можете быстро и безопасно купить UC для PUBG Mobile.\n\n\
    💳 <b>Оплата:</b> DonationAlerts\n\
    ⚡ <b>Зачисление:</b> 5-10 минут\n\
    🔒 <b>Безопасность:</b> Гарантируем защиту\n\n\
    Выберите действие:";

const PACKAGE_LIST_TEXT: &str = "💎 <b>Выберите пакет UC:</b>\n\n";

const HELP_TEXT: &str = "ℹ️ <b>Доступные команды:</b>\n\n\
    /start - Главное меню\n\
    /buy - Купить UC\n\n\
    Или используйте кнопки ниже:";

/// A conversation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    PackageList,
    PaymentDetail(Bundle),
    SupportInfo,
    Help,
}

/// Rendered screen: HTML body plus keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub text: String,
    pub keyboard: InlineKeyboard,
}

impl Screen {
    /// Payment detail for the bundle with textual identifier `id`
    pub fn payment_detail(id: &str) -> Result<Self, DomainError> {
        Bundle::find(id)
            .map(Self::PaymentDetail)
            .ok_or_else(|| DomainError::UnknownBundle(id.to_string()))
    }

    /// Short name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::PackageList => "package_list",
            Self::PaymentDetail(_) => "payment_detail",
            Self::SupportInfo => "support_info",
            Self::Help => "help",
        }
    }

    /// Render body and keyboard
    #[must_use]
    pub fn render(&self) -> ScreenContent {
        match self {
            Self::Welcome => ScreenContent {
                text: WELCOME_TEXT.to_string(),
                keyboard: main_menu_keyboard(),
            },
            Self::PackageList => ScreenContent {
                text: PACKAGE_LIST_TEXT.to_string(),
                keyboard: InlineKeyboard::single_column(
                    CATALOG
                        .iter()
                        .map(|bundle| Button::callback(bundle.menu_label(), bundle.callback_tag())),
                ),
            },
            Self::PaymentDetail(bundle) => ScreenContent {
                text: payment_detail_text(bundle),
                keyboard: InlineKeyboard::single_column([
                    Button::url("💳 Перейти к оплате", bundle.payment_url()),
                    Button::callback("◀️ Назад к пакетам", actions::BUY),
                ]),
            },
            Self::SupportInfo => ScreenContent {
                text: support_text(),
                keyboard: InlineKeyboard::single_column([
                    Button::url("📱 Написать в поддержку", SUPPORT_URL),
                    Button::callback("◀️ Главное меню", actions::START),
                ]),
            },
            Self::Help => ScreenContent {
                text: HELP_TEXT.to_string(),
                keyboard: main_menu_keyboard(),
            },
        }
    }
}

fn main_menu_keyboard() -> InlineKeyboard {
    InlineKeyboard::single_column([
        Button::callback(BUY_LABEL, actions::BUY),
        Button::callback(SUPPORT_LABEL, actions::SUPPORT),
    ])
}

fn payment_detail_text(bundle: &Bundle) -> String {
    let bonus = bundle
        .bonus_percent
        .map(|bonus| format!("\n🎁 Бонус: +{bonus}%"))
        .unwrap_or_default();
    let price = bundle.price;

    format!(
        "📦 <b>Выбран пакет:</b>\n\
         💎 {quantity} UC\n\
         💰 Цена: {price}₽{bonus}\n\n\
         <b>Инструкция по оплате:</b>\n\n\
         1️⃣ Перейдите по ссылке для оплаты\n\
         2️⃣ Укажите сумму: <code>{price}</code>₽\n\
         3️⃣ В комментарии напишите ваш игровой ID PUBG\n\
         4️⃣ Завершите оплату\n\n\
         ⚡ UC будут зачислены автоматически в течение 5-10 минут\n\n\
         💬 Возникли вопросы? Напишите {SUPPORT_HANDLE}",
        quantity = bundle.quantity,
    )
}

fn support_text() -> String {
    format!(
        "💬 <b>Поддержка 24/7</b>\n\n\
         По любым вопросам обращайтесь:\n\
         👤 Telegram: {SUPPORT_HANDLE}\n\n\
         ⚡ Отвечаем в течение 5 минут!"
    )
}
