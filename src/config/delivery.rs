//! Pickup-point directory configuration.
//!
//! The `[delivery]` table of catalog.toml may replace the city list or the street
//! templates. Anything left out keeps the built-in values.

use serde::Deserialize;

const CITIES: [&str; 51] = [
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань",
    "Нижний Новгород", "Челябинск", "Самара", "Омск", "Ростов-на-Дону",
    "Уфа", "Красноярск", "Воронеж", "Пермь", "Волгоград",
    "Краснодар", "Саратов", "Тюмень", "Тольятти", "Ижевск",
    "Барнаул", "Ульяновск", "Иркутск", "Хабаровск", "Ярославль",
    "Владивосток", "Махачкала", "Томск", "Оренбург", "Кемерово",
    "Новокузнецк", "Рязань", "Астрахань", "Набережные Челны", "Пенза",
    "Киров", "Липецк", "Чебоксары", "Калининград", "Тула",
    "Курск", "Ставрополь", "Сочи", "Улан-Удэ", "Тверь",
    "Магнитогорск", "Иваново", "Брянск", "Белгород", "Архангельск",
    "Елец",
];

const STREETS: [&str; 5] = [
    "ул. Ленина, 10",
    "ул. Гагарина, 25",
    "ул. Советская, 5",
    "пр-т Мира, 100",
    "ул. Пушкина, 15",
];

/// Cities served and the street addresses every city has a pickup point at
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliveryConfig {
    /// Cities served
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    /// Street addresses repeated in every city
    #[serde(default = "default_streets")]
    pub streets: Vec<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            streets: default_streets(),
        }
    }
}

fn default_cities() -> Vec<String> {
    CITIES.iter().map(ToString::to_string).collect()
}

fn default_streets() -> Vec<String> {
    STREETS.iter().map(ToString::to_string).collect()
}
