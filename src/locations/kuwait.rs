//! Kuwait governorates and their residential areas

use super::LocationIndex;

pub(super) fn index() -> LocationIndex {
    let entries = vec![
        (
            "العاصمة",
            vec![
                "الكويت",
                "دسمان",
                "الشرق",
                "الصالحية",
                "المرقاب",
                "القبلة",
                "بنيد القار",
                "كيفان",
                "الدسمة",
                "الدعية",
                "المنصورية",
                "عبدالله السالم",
                "النزهة",
                "الفيحاء",
                "الشامية",
                "الروضة",
                "العديلية",
                "الخالدية",
                "القادسية",
                "قرطبة",
                "السرة",
                "اليرموك",
                "الشويخ",
                "الري",
                "غرناطة",
                "صليبيخات",
                "الدوحة",
                "النهضة",
                "القيروان",
                "جابر الاحمد",
                "شمال غرب صليبيخات",
            ],
        ),
        (
            "حولي",
            vec![
                "حولي",
                "الشعب",
                "السالمية",
                "الرميثية",
                "الجابرية",
                "مشرف",
                "بيان",
                "البدع",
                "النقرة",
                "سلوى",
                "الزهراء",
                "حطين",
                "السلام",
                "الشهداء",
                "الصديق",
                "مبارك عبدالله الجابر",
            ],
        ),
        (
            "الفروانية",
            vec![
                "الفروانية",
                "خيطان",
                "خيطان الجنوبي",
                "ابرق خيطان",
                "العمرية",
                "الرابية",
                "اشبيلية",
                "جليب الشيوخ",
                "الاندلس",
                "الفردوس",
                "العارضية",
                "صباح الناصر",
                "الرقعي",
                "الرحاب",
                "عبدالله المبارك",
                "جنوب عبدالله المبارك",
                "غرب عبدالله المبارك",
                "الضجيج",
            ],
        ),
        (
            "الاحمدي",
            vec![
                "الاحمدي",
                "الفنطاس",
                "العقيلة",
                "جابر العلي",
                "هدية",
                "الرقة",
                "الظهر",
                "الفحيحيل",
                "المنقف",
                "ابو حليفة",
                "الصباحية",
                "المهبولة",
                "فهد الاحمد",
                "علي صباح السالم (ام الهيمان)",
                "ميناء عبدالله",
                "بنيدر",
                "الجليعة",
                "الزور",
                "الخيران",
                "صباح الاحمد",
                "خيران السكنية",
                "الوفرة",
            ],
        ),
        (
            "مبارك الكبير",
            vec![
                "مبارك الكبير",
                "صباح السالم",
                "المسيلة",
                "العدان",
                "القصور",
                "القرين",
                "ابو فطيرة",
                "الفنيطيس",
                "ابو الحصانية",
                "صبحان",
                "اسواق القرين",
            ],
        ),
        (
            "الجهراء",
            vec![
                "الجهراء",
                "الواحة",
                "العيون",
                "القصر",
                "النسيم",
                "تيماء",
                "النعيم",
                "كاظمة",
                "الصليبية",
                "سعد عبدالله",
                "المطلاع",
                "العبدلي",
                "السالمي",
                "كبد",
            ],
        ),
    ];

    LocationIndex::from_entries(entries)
        .expect("built-in location table is consistent")
}
