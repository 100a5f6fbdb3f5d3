//! Message catalogs for the three supported languages.
//!
//! Lookup falls back key-by-key to the default language, then to the key
//! itself, so a missing translation degrades to something greppable instead
//! of a panic. `{name}` placeholders are substituted from caller pairs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Hy,
    Ru,
}

pub const DEFAULT_LANG: Lang = Lang::Hy;

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hy => "hy",
            Lang::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "hy" => Some(Lang::Hy),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }
}

pub struct Catalog {
    lang: Lang,
}

impl Catalog {
    pub fn new(lang: Lang) -> Catalog {
        Catalog { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn t(&self, key: &str) -> String {
        lookup(self.lang, key)
            .or_else(|| lookup(DEFAULT_LANG, key))
            .unwrap_or(key)
            .to_string()
    }

    pub fn t_with(&self, key: &str, params: &[(&str, String)]) -> String {
        let mut text = self.t(key);
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let table: &[(&str, &str)] = match lang {
        Lang::En => EN,
        Lang::Hy => HY,
        Lang::Ru => RU,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

static EN: &[(&str, &str)] = &[
    ("validation.roleRequired", "Role is required"),
    ("validation.specifyRole", "Please specify your role"),
    ("validation.levelRequired", "Level is required"),
    ("validation.experienceRequired", "Experience is required"),
    ("validation.experienceRange", "Must be between 0 and 40"),
    ("validation.salaryRequired", "Salary amount is required"),
    ("validation.salaryPositive", "Must be greater than 0"),
    ("validation.salaryTooHigh", "Value seems too high"),
    ("validation.currencyRequired", "Currency is required"),
    ("validation.periodRequired", "Period is required"),
    ("validation.netOrGrossRequired", "Please choose net or gross"),
    ("validation.locationRequired", "Location is required"),
    ("validation.specifyLocation", "Please specify your location"),
    ("validation.specifyCompany", "Please specify the company"),
    ("validation.companyRequired", "Company name is required"),
    ("form.cooldown", "Please wait {seconds}s before submitting again"),
    ("success.submitted", "Your anonymous salary data has been submitted."),
    (
        "success.savedLocally",
        "Could not reach the server — saved locally, retry when you are back online.",
    ),
    ("success.claimToken", "Your claim token:"),
    ("queue.queued", "{count} submission(s) waiting to retry"),
    ("queue.sent", "Sent: {sent}, failed: {failed}"),
];

static HY: &[(&str, &str)] = &[
    ("validation.roleRequired", "Դերը պարտադիր է"),
    ("validation.specifyRole", "Խնդրում ենք նշել ձեր դերը"),
    ("validation.levelRequired", "Մակարդակը պարտադիր է"),
    ("validation.experienceRequired", "Փորձը պարտադիր է"),
    ("validation.experienceRange", "Պետք է լինի 0-ից 40 միջակայքում"),
    ("validation.salaryRequired", "Աշխատավարձի չափը պարտադիր է"),
    ("validation.salaryPositive", "Պետք է լինի 0-ից մեծ"),
    ("validation.salaryTooHigh", "Արժեքը չափազանց մեծ է թվում"),
    ("validation.currencyRequired", "Արժույթը պարտադիր է"),
    ("validation.periodRequired", "Ժամանակահատվածը պարտադիր է"),
    ("validation.netOrGrossRequired", "Ընտրեք՝ զո՞ւտ, թե՞ համախառն"),
    ("validation.locationRequired", "Գտնվելու վայրը պարտադիր է"),
    ("validation.specifyLocation", "Խնդրում ենք նշել ձեր գտնվելու վայրը"),
    ("validation.specifyCompany", "Խնդրում ենք նշել ընկերությունը"),
    ("validation.companyRequired", "Ընկերության անունը պարտադիր է"),
    (
        "form.cooldown",
        "Խնդրում ենք սպասել {seconds} վայրկյան կրկին ուղարկելուց առաջ",
    ),
    (
        "success.submitted",
        "Ձեր անանուն աշխատավարձի տվյալներն ուղարկված են։",
    ),
    (
        "success.savedLocally",
        "Սերվերը հասանելի չէ — տվյալները պահված են տեղում, կրկնեք ավելի ուշ։",
    ),
    ("success.claimToken", "Ձեր ստացականի կոդը՝"),
    ("queue.queued", "{count} ուղարկում սպասում է կրկնակի փորձի"),
    ("queue.sent", "Ուղարկված՝ {sent}, ձախողված՝ {failed}"),
];

static RU: &[(&str, &str)] = &[
    ("validation.roleRequired", "Должность обязательна"),
    ("validation.specifyRole", "Пожалуйста, укажите вашу должность"),
    ("validation.levelRequired", "Уровень обязателен"),
    ("validation.experienceRequired", "Опыт обязателен"),
    ("validation.experienceRange", "Должно быть от 0 до 40"),
    ("validation.salaryRequired", "Укажите размер зарплаты"),
    ("validation.salaryPositive", "Должно быть больше 0"),
    ("validation.salaryTooHigh", "Значение выглядит слишком большим"),
    ("validation.currencyRequired", "Валюта обязательна"),
    ("validation.periodRequired", "Период обязателен"),
    ("validation.netOrGrossRequired", "Выберите нетто или брутто"),
    ("validation.locationRequired", "Локация обязательна"),
    ("validation.specifyLocation", "Пожалуйста, укажите вашу локацию"),
    ("validation.specifyCompany", "Пожалуйста, укажите компанию"),
    ("validation.companyRequired", "Название компании обязательно"),
    ("form.cooldown", "Подождите {seconds} с перед повторной отправкой"),
    (
        "success.submitted",
        "Ваши анонимные данные о зарплате отправлены.",
    ),
    (
        "success.savedLocally",
        "Сервер недоступен — данные сохранены локально, повторите позже.",
    ),
    ("success.claimToken", "Ваш код-квитанция:"),
    ("queue.queued", "В очереди на повтор: {count}"),
    ("queue.sent", "Отправлено: {sent}, не удалось: {failed}"),
];
