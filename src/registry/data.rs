//! Built-in province → location tables.
//!
//! Entries are display strings kept exactly as collected. Balochistan lists
//! Gwadar twice, and Hasan Abdal is spelled differently under Punjab and KPK.

use super::types::Province;

const PUNJAB: &[&str] = &[
    "Lahore",
    "Faisalabad",
    "Rawalpindi",
    "Multan",
    "Gujranwala",
    "Sialkot",
    "Bahawalpur",
    "Sargodha",
    "Sheikhupura",
    "Jhang",
    "Rahim Yar Khan",
    "Gujrat",
    "Kasur",
    "Sahiwal",
    "Okara",
    "Wah Cantonment",
    "Dera Ghazi Khan",
    "Chiniot",
    "Kamoke",
    "Mandi Bahauddin",
    "Jhelum",
    "Sadiqabad",
    "Khanewal",
    "Hafizabad",
    "Muzaffargarh",
    "Khanpur",
    "Gojra",
    "Bahawalnagar",
    "Pakpattan",
    "Vehari",
    "Attock",
    "Hasan Abdal",
    "Chakwal",
    "Mianwali",
    "Bhakkar",
    "Layyah",
    "Lodhran",
    "Narowal",
    "Toba Tek Singh",
    "Murree",
    "Taxila",
    "Lahore Cantt",
];

const SINDH: &[&str] = &[
    "Karachi",
    "Hyderabad",
    "Sukkur",
    "Larkana",
    "Nawabshah",
    "Mirpur Khas",
    "Jacobabad",
    "Shikarpur",
    "Khairpur",
    "Dadu",
    "Thatta",
    "Badin",
    "Sanghar",
    "Umerkot",
    "Tando Adam",
    "Tando Allahyar",
    "Kotri",
    "Jamshoro",
    "Ghotki",
    "Kashmore",
    "Matiari",
    "Mithi",
    "Naushahro Feroze",
    "Kandhkot",
    "Sehwan",
];

const KPK: &[&str] = &[
    "Peshawar",
    "Mardan",
    "Abbottabad",
    "Mingora",
    "Kohat",
    "Dera Ismail Khan",
    "Bannu",
    "Swabi",
    "Charsadda",
    "Nowshera",
    "Mansehra",
    "Haripur",
    "Hassan Abdal",
    "Chitral",
    "Dir",
    "Karak",
    "Lakki Marwat",
    "Tank",
    "Batkhela",
    "Timergara",
    "Hangu",
    "Parachinar",
    "Landi Kotal",
    "Nathia Gali",
    "Kalam",
];

const BALOCHISTAN: &[&str] = &[
    "Quetta",
    "Gwadar",
    "Turbat",
    "Khuzdar",
    "Hub",
    "Chaman",
    "Sibi",
    "Zhob",
    "Loralai",
    "Dera Murad Jamali",
    "Nushki",
    "Kharan",
    "Panjgur",
    "Mastung",
    "Kalat",
    "Pasni",
    "Ormara",
    "Jiwani",
    "Gwadar",
    "Dera Bugti",
    "Kohlu",
    "Usta Muhammad",
    "Awaran",
    "Lasbela",
    "Pishin",
    "Ziarat",
];

const GILGIT_BALTISTAN: &[&str] = &[
    "Gilgit",
    "Skardu",
    "Hunza",
    "Karimabad",
    "Aliabad",
    "Chilas",
    "Ghizer",
    "Gahkuch",
    "Khaplu",
    "Shigar",
    "Astore",
    "Nagar",
    "Sost",
    "Passu",
    "Gupis",
];

const AZAD_KASHMIR: &[&str] = &[
    "Muzaffarabad",
    "Mirpur",
    "Kotli",
    "Bhimber",
    "Rawalakot",
    "Bagh",
    "Pallandari",
    "Hajira",
    "Athmuqam",
    "Hattian Bala",
    "Forward Kahuta",
    "Dadyal",
    "Sharda",
    "Neelum",
];

const ISLAMABAD: &[&str] = &[
    "Blue Area",
    "F-6",
    "F-7",
    "F-8",
    "F-10",
    "F-11",
    "G-6",
    "G-7",
    "G-8",
    "G-9",
    "G-10",
    "G-11",
    "G-13",
    "I-8",
    "I-9",
    "I-10",
    "E-7",
    "E-11",
    "DHA Islamabad",
    "Bahria Town",
    "Gulberg Greens",
    "PWD",
    "Bani Gala",
    "Chak Shahzad",
    "Tarlai",
    "Saidpur Village",
    "Shah Allah Ditta",
    "Faisal Mosque",
    "Diplomatic Enclave",
    "President House",
];

/// The stored list for `province`. Never empty.
pub(crate) fn table(province: Province) -> &'static [&'static str] {
    match province {
        Province::Punjab => PUNJAB,
        Province::Sindh => SINDH,
        Province::Kpk => KPK,
        Province::Balochistan => BALOCHISTAN,
        Province::GilgitBaltistan => GILGIT_BALTISTAN,
        Province::AzadKashmir => AZAD_KASHMIR,
        Province::Islamabad => ISLAMABAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_non_empty() {
        for p in Province::ALL {
            assert!(!table(p).is_empty(), "{} has no locations", p);
        }
    }

    #[test]
    fn test_islamabad_table() {
        assert_eq!(ISLAMABAD.len(), 30);
        assert_eq!(ISLAMABAD.first(), Some(&"Blue Area"));
        assert_eq!(ISLAMABAD.last(), Some(&"President House"));
    }

    #[test]
    fn test_duplicates_preserved() {
        let gwadar = BALOCHISTAN.iter().filter(|n| **n == "Gwadar").count();
        assert_eq!(gwadar, 2);
        assert!(PUNJAB.contains(&"Hasan Abdal"));
        assert!(KPK.contains(&"Hassan Abdal"));
    }
}
