use chrono::{NaiveDate, Weekday};
use weekdays::{
    BuiltinFormatter, CasePolicy, FirstDay, FixedClock, WeekdayGenerator, WeekdayStyle,
    WeekdaysOptions,
};

fn generator_on(y: i32, m: u32, d: u32) -> WeekdayGenerator<BuiltinFormatter, FixedClock> {
    WeekdayGenerator::with_parts(
        BuiltinFormatter::with_default_locale("en-US"),
        FixedClock(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
    )
}

#[test]
fn test_german_abbreviated_from_monday() {
    let opts = WeekdaysOptions::default()
        .with_locales("de-DE")
        .with_style(WeekdayStyle::Abbreviated)
        .with_first(Weekday::Mon);

    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(week, ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]);
}

#[test]
fn test_arabic_full_from_saturday() {
    let opts = WeekdaysOptions::default()
        .with_locales("ar")
        .with_first(Weekday::Sat);

    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(
        week,
        ["السبت", "الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة"]
    );
}

#[test]
fn test_russian_minimal_uppercase() {
    let opts = WeekdaysOptions::default()
        .with_locales("ru")
        .with_style(WeekdayStyle::Minimal)
        .with_case(CasePolicy::Upper);

    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(week, ["В", "П", "В", "С", "Ч", "П", "С"]);
}

#[test]
fn test_locale_fallback_chain() {
    let opts = WeekdaysOptions::default()
        .with_locales(["xx-XX", "qq-QQ", "fr-CH"])
        .with_first(Weekday::Sat)
        .with_case(CasePolicy::Capitalized);

    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(
        week,
        ["Samedi", "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi"]
    );
}

#[test]
fn test_all_unknown_locales_use_default() {
    let opts = WeekdaysOptions::default().with_locales(["xx-XX", "qq-QQ"]);
    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(
        week,
        ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
    );
}

#[test]
fn test_ambient_locale_matches_explicit_default() {
    let gen = WeekdayGenerator::with_parts(
        BuiltinFormatter::with_default_locale("de-DE"),
        FixedClock(NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()),
    );
    let ambient = gen.generate(&WeekdaysOptions::default());
    let explicit = gen.generate(&WeekdaysOptions::default().with_locales("de-DE"));
    assert_eq!(ambient, explicit);
    assert_eq!(ambient[0], "Sonntag");
}

#[test]
fn test_turkish_uppercase() {
    let opts = WeekdaysOptions::default()
        .with_locales("tr")
        .with_case(CasePolicy::Upper);

    let week = generator_on(2025, 10, 22).generate(&opts);
    assert_eq!(
        week,
        ["PAZAR", "PAZARTESİ", "SALI", "ÇARŞAMBA", "PERŞEMBE", "CUMA", "CUMARTESİ"]
    );
}

#[test]
fn test_chinese_from_current_day() {
    // 2025-10-20 is a Monday
    let opts = WeekdaysOptions::default()
        .with_locales("zh-CN")
        .with_first(FirstDay::Current);

    let week = generator_on(2025, 10, 20).generate(&opts);
    assert_eq!(
        week,
        ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"]
    );
}

#[test]
fn test_current_day_on_year_boundary() {
    // 2025-12-31 is a Wednesday
    let opts = WeekdaysOptions::default()
        .with_locales("en-GB")
        .with_style(WeekdayStyle::Abbreviated)
        .with_first(FirstDay::Current);

    let week = generator_on(2025, 12, 31).generate(&opts);
    assert_eq!(week, ["Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"]);
}
