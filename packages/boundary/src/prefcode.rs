//! Prefecture code utilities.
//!
//! Maps prefecture names to the two-digit JIS X 0401 codes that key the
//! city-level boundary source endpoints. Both the full official name
//! (東京都) and the suffix-stripped variant (東京) are accepted, since
//! upstream names arrive in either form. This table selects data sources
//! only; the matching logic itself never consults it.

/// Two-digit codes for the 47 prefectures.
pub const PREFECTURE_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
    "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
];

/// Maps a prefecture name (full or suffix-stripped) to its two-digit code.
///
/// Returns `None` for unrecognized names.
#[must_use]
pub fn prefecture_code(name: &str) -> Option<&'static str> {
    let code = match name.trim() {
        "北海道" | "北海" => "01",
        "青森県" | "青森" => "02",
        "岩手県" | "岩手" => "03",
        "宮城県" | "宮城" => "04",
        "秋田県" | "秋田" => "05",
        "山形県" | "山形" => "06",
        "福島県" | "福島" => "07",
        "茨城県" | "茨城" => "08",
        "栃木県" | "栃木" => "09",
        "群馬県" | "群馬" => "10",
        "埼玉県" | "埼玉" => "11",
        "千葉県" | "千葉" => "12",
        "東京都" | "東京" => "13",
        "神奈川県" | "神奈川" => "14",
        "新潟県" | "新潟" => "15",
        "富山県" | "富山" => "16",
        "石川県" | "石川" => "17",
        "福井県" | "福井" => "18",
        "山梨県" | "山梨" => "19",
        "長野県" | "長野" => "20",
        "岐阜県" | "岐阜" => "21",
        "静岡県" | "静岡" => "22",
        "愛知県" | "愛知" => "23",
        "三重県" | "三重" => "24",
        "滋賀県" | "滋賀" => "25",
        "京都府" | "京都" => "26",
        "大阪府" | "大阪" => "27",
        "兵庫県" | "兵庫" => "28",
        "奈良県" | "奈良" => "29",
        "和歌山県" | "和歌山" => "30",
        "鳥取県" | "鳥取" => "31",
        "島根県" | "島根" => "32",
        "岡山県" | "岡山" => "33",
        "広島県" | "広島" => "34",
        "山口県" | "山口" => "35",
        "徳島県" | "徳島" => "36",
        "香川県" | "香川" => "37",
        "愛媛県" | "愛媛" => "38",
        "高知県" | "高知" => "39",
        "福岡県" | "福岡" => "40",
        "佐賀県" | "佐賀" => "41",
        "長崎県" | "長崎" => "42",
        "熊本県" | "熊本" => "43",
        "大分県" | "大分" => "44",
        "宮崎県" | "宮崎" => "45",
        "鹿児島県" | "鹿児島" => "46",
        "沖縄県" | "沖縄" => "47",
        _ => return None,
    };
    Some(code)
}

/// Maps a two-digit code back to the full prefecture name.
///
/// Returns `"不明"` for unrecognized codes; used only for logging.
#[must_use]
pub fn prefecture_name(code: &str) -> &'static str {
    match code {
        "01" => "北海道",
        "02" => "青森県",
        "03" => "岩手県",
        "04" => "宮城県",
        "05" => "秋田県",
        "06" => "山形県",
        "07" => "福島県",
        "08" => "茨城県",
        "09" => "栃木県",
        "10" => "群馬県",
        "11" => "埼玉県",
        "12" => "千葉県",
        "13" => "東京都",
        "14" => "神奈川県",
        "15" => "新潟県",
        "16" => "富山県",
        "17" => "石川県",
        "18" => "福井県",
        "19" => "山梨県",
        "20" => "長野県",
        "21" => "岐阜県",
        "22" => "静岡県",
        "23" => "愛知県",
        "24" => "三重県",
        "25" => "滋賀県",
        "26" => "京都府",
        "27" => "大阪府",
        "28" => "兵庫県",
        "29" => "奈良県",
        "30" => "和歌山県",
        "31" => "鳥取県",
        "32" => "島根県",
        "33" => "岡山県",
        "34" => "広島県",
        "35" => "山口県",
        "36" => "徳島県",
        "37" => "香川県",
        "38" => "愛媛県",
        "39" => "高知県",
        "40" => "福岡県",
        "41" => "佐賀県",
        "42" => "長崎県",
        "43" => "熊本県",
        "44" => "大分県",
        "45" => "宮崎県",
        "46" => "鹿児島県",
        "47" => "沖縄県",
        _ => "不明",
    }
}

#[cfg(test)]
mod tests {
    use photo_map_address::normalize::normalize_prefecture;

    use super::*;

    #[test]
    fn all_codes_round_trip_through_full_name() {
        for code in PREFECTURE_CODES {
            let name = prefecture_name(code);
            assert_ne!(name, "不明");
            assert_eq!(prefecture_code(name), Some(*code), "failed for {name}");
        }
    }

    #[test]
    fn all_codes_round_trip_through_stripped_name() {
        for code in PREFECTURE_CODES {
            let stripped = normalize_prefecture(prefecture_name(code));
            assert_eq!(prefecture_code(&stripped), Some(*code), "failed for {stripped}");
        }
    }

    #[test]
    fn table_has_47_entries() {
        assert_eq!(PREFECTURE_CODES.len(), 47);
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(prefecture_code("ソウル"), None);
        assert_eq!(prefecture_code(""), None);
    }
}
