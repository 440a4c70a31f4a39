/// One row of the IBAN country table.
///
/// `layout` is written in the usual printed form (groups of four separated by
/// spaces) and uses one marker letter per character position: `k` for the
/// IBAN check digits, `b` for the bank code, `s` for the branch code, `c` for
/// the account number, `x` for national check digits. Other letters are
/// country specific and explained in `notes`.
#[derive(Debug, Clone, Copy)]
pub struct CountryEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub length: usize,
    pub bban_format: &'static str,
    pub layout: &'static str,
    pub notes: &'static str,
}

/// Sorted by country code.
pub const COUNTRY_ENTRIES: &[CountryEntry] = &[
    CountryEntry {
        code: "AD",
        name: "Andorra",
        length: 24,
        bban_format: "8n,12c",
        layout: "ADkk bbbb ssss cccc cccc cccc",
        notes: "b = National bank code s = Branch code c = Account number",
    },
    CountryEntry {
        code: "AE",
        name: "United Arab Emirates",
        length: 23,
        bban_format: "3n,16n",
        layout: "AEkk bbbc cccc cccc cccc ccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "AL",
        name: "Albania",
        length: 28,
        bban_format: "8n,16c",
        layout: "ALkk bbbs sssx cccc cccc cccc cccc",
        notes: "b = National bank code s = Branch code x = National check digit c = Account number",
    },
    CountryEntry {
        code: "AO",
        name: "Angola",
        length: 25,
        bban_format: "21n",
        layout: "AOkk bbbb ssss cccc cccc cccx x",
        notes: "b = Bank code; c = Account number; x = Check digit",
    },
    CountryEntry {
        code: "AT",
        name: "Austria",
        length: 20,
        bban_format: "16n",
        layout: "ATkk bbbb bccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "AZ",
        name: "Azerbaijan",
        length: 28,
        bban_format: "4c,20n",
        layout: "AZkk bbbb cccc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "BA",
        name: "Bosnia and Herzegovina",
        length: 20,
        bban_format: "16n",
        layout: "BAkk bbbs sscc cccc ccxx",
        notes: "k = IBAN check digits (always 39) b = National bank code s = Branch code c = Account number x = National check digits",
    },
    CountryEntry {
        code: "BE",
        name: "Belgium",
        length: 16,
        bban_format: "12n",
        layout: "BEkk bbbc cccc ccxx",
        notes: "b = National bank code c = Account number x = National check digits",
    },
    CountryEntry {
        code: "BF",
        name: "Burkina Faso",
        length: 28,
        bban_format: "24n",
        layout: "BFkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "BG",
        name: "Bulgaria",
        length: 22,
        bban_format: "4a,6n,8c",
        layout: "BGkk bbbb ssss ddcc cccc cc",
        notes: "b = BIC bank code s = Branch (BAE) number d = Account type c = Account number",
    },
    CountryEntry {
        code: "BH",
        name: "Bahrain",
        length: 22,
        bban_format: "4a,14c",
        layout: "BHkk bbbb cccc cccc cccc cc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "BI",
        name: "Burundi",
        length: 16,
        bban_format: "12n",
        layout: "BIkk bbbb cccc cccc",
        notes: "b = Bank code; c = Account number",
    },
    CountryEntry {
        code: "BJ",
        name: "Benin",
        length: 28,
        bban_format: "24n",
        layout: "BJkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "BL",
        name: "Saint Barthélemy",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "BLkk bbbb bsss sscc cccc cccc cxx",
        notes: "b = Bank code; s = Branch code; c = Account number; x = National check digits",
    },
    CountryEntry {
        code: "BR",
        name: "Brazil",
        length: 29,
        bban_format: "23n,1a,1c",
        layout: "BRkk bbbb bbbb ssss sccc cccc ccct n",
        notes: "k = IBAN check digits (Calculated by MOD 97-10) b = National bank code s = Branch code c = Account Number t = Account type (Cheque account, Savings account etc.) n = Owner account number (1, 2 etc.)",
    },
    CountryEntry {
        code: "BY",
        name: "Belarus",
        length: 28,
        bban_format: "4c,20n",
        layout: "BYkk bbbb cccc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "CF",
        name: "Central African Republic",
        length: 27,
        bban_format: "23n",
        layout: "CFkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "CG",
        name: "Congo",
        length: 27,
        bban_format: "23n",
        layout: "CGkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "CH",
        name: "Switzerland",
        length: 21,
        bban_format: "5n,12c",
        layout: "CHkk bbbb bccc cccc cccc c",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "CI",
        name: "Ivory Coast",
        length: 28,
        bban_format: "24n",
        layout: "CIkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "CM",
        name: "Cameroon",
        length: 27,
        bban_format: "23n",
        layout: "CMkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "CR",
        name: "Costa Rica",
        length: 22,
        bban_format: "18n",
        layout: "CRkk 0bbb cccc cccc cccc cc",
        notes: "0 = Reserved b = Bank code c = Account number",
    },
    CountryEntry {
        code: "CV",
        name: "Cape Verde",
        length: 25,
        bban_format: "21n",
        layout: "CVkk bbbb ssss cccc cccc cccx x",
        notes: "b = Bank code; s = Branch code; c = Account number; x = Check digit",
    },
    CountryEntry {
        code: "CY",
        name: "Cyprus",
        length: 28,
        bban_format: "8n,16c",
        layout: "CYkk bbbs ssss cccc cccc cccc cccc",
        notes: "b = National bank code s = Branch code c = Account number",
    },
    CountryEntry {
        code: "CZ",
        name: "Czech Republic",
        length: 24,
        bban_format: "20n",
        layout: "CZkk bbbb ssss sscc cccc cccc",
        notes: "b = National bank code s = Account number prefix c = Account number",
    },
    CountryEntry {
        code: "DE",
        name: "Germany",
        length: 22,
        bban_format: "18n",
        layout: "DEkk bbbb bbbb cccc cccc cc",
        notes: "b = Bank and branch identifier (de:Bankleitzahl or BLZ) c = Account number",
    },
    CountryEntry {
        code: "DJ",
        name: "Djibouti",
        length: 27,
        bban_format: "23n",
        layout: "DJkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "DK",
        name: "Denmark",
        length: 18,
        bban_format: "14n",
        layout: "DKkk bbbb cccc cccc cc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "DO",
        name: "Dominican Republic",
        length: 28,
        bban_format: "4a,20n",
        layout: "DOkk bbbb cccc cccc cccc cccc cccc",
        notes: "b = Bank identifier c = Account number",
    },
    CountryEntry {
        code: "DZ",
        name: "Algeria",
        length: 26,
        bban_format: "22n",
        layout: "DZkk bbbb ssss cccc cccc cccc cc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "EE",
        name: "Estonia",
        length: 20,
        bban_format: "16n",
        layout: "EEkk bbss cccc cccc cccx",
        notes: "b = National bank code s = Branch code c = Account number x = National check digit",
    },
    CountryEntry {
        code: "EG",
        name: "Egypt",
        length: 29,
        bban_format: "25n",
        layout: "EGkk bbbb ssss cccc cccc cccc cccc c",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "ES",
        name: "Spain",
        length: 24,
        bban_format: "20n",
        layout: "ESkk bbbb gggg xxcc cccc cccc",
        notes: "b = National bank code g = Branch code x = Check digits c = Account number",
    },
    CountryEntry {
        code: "FI",
        name: "Finland",
        length: 18,
        bban_format: "14n",
        layout: "FIkk bbbb bbcc cccc cx",
        notes: "b = Bank and branch code c = Account number x = National check digit",
    },
    CountryEntry {
        code: "FO",
        name: "Faroe Islands",
        length: 18,
        bban_format: "14n",
        layout: "FOkk bbbb cccc cccc cx",
        notes: "b = National bank code c = Account number x = National check digit",
    },
    CountryEntry {
        code: "FR",
        name: "France",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "FRkk bbbb bggg ggcc cccc cccc cxx",
        notes: "b = National bank code g = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)",
    },
    CountryEntry {
        code: "GA",
        name: "Gabon",
        length: 27,
        bban_format: "23n",
        layout: "GAkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "GB",
        name: "United Kingdom",
        length: 22,
        bban_format: "4a,14n",
        layout: "GBkk bbbb ssss sscc cccc cc",
        notes: "b = BIC bank code s = Bank and branch code (sort code) c = Account number",
    },
    CountryEntry {
        code: "GE",
        name: "Georgia",
        length: 22,
        bban_format: "2c,16n",
        layout: "GEkk bbcc cccc cccc cccc cc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "GG",
        name: "Guernsey",
        length: 22,
        bban_format: "4a,14n",
        layout: "GGkk bbbb ssss sscc cccc cc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "GI",
        name: "Gibraltar",
        length: 23,
        bban_format: "4a,15c",
        layout: "GIkk bbbb cccc cccc cccc ccc",
        notes: "b = BIC bank code c = Account number",
    },
    CountryEntry {
        code: "GL",
        name: "Greenland",
        length: 18,
        bban_format: "14n",
        layout: "GLkk bbbb cccc cccc cc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "GQ",
        name: "Equatorial Guinea",
        length: 27,
        bban_format: "23n",
        layout: "GQkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "GR",
        name: "Greece",
        length: 27,
        bban_format: "7n,16c",
        layout: "GRkk bbbs sssc cccc cccc cccc ccc",
        notes: "b = National bank code s = Branch code c = Account number",
    },
    CountryEntry {
        code: "GT",
        name: "Guatemala",
        length: 28,
        bban_format: "4c,20c",
        layout: "GTkk bbbb mmtt cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number m = Currency t = Account type",
    },
    CountryEntry {
        code: "GW",
        name: "Guinea Bissau",
        length: 25,
        bban_format: "21n",
        layout: "GWkk bbbb ssss cccc cccc cccx x",
        notes: "b = Bank code; s = Branch code; c = Account number; x = Check digit",
    },
    CountryEntry {
        code: "HN",
        name: "Honduras",
        length: 28,
        bban_format: "24n",
        layout: "HNkk pppp cccc cccc cccc cccc cccc",
        notes: "p = Bank identifier code; c = Account number",
    },
    CountryEntry {
        code: "HR",
        name: "Croatia",
        length: 21,
        bban_format: "17n",
        layout: "HRkk bbbb bbbc cccc cccc c",
        notes: "b = Bank code c = Account number",
    },
    CountryEntry {
        code: "HU",
        name: "Hungary",
        length: 28,
        bban_format: "24n",
        layout: "HUkk bbbs sssk cccc cccc cccc cccx",
        notes: "b = National bank code s = Branch code c = Account number x = National check digit",
    },
    CountryEntry {
        code: "IE",
        name: "Ireland",
        length: 22,
        bban_format: "4c,14n",
        layout: "IEkk aaaa bbbb bbcc cccc cc",
        notes: "a = BIC bank code b = Bank/branch code (sort code) c = Account number",
    },
    CountryEntry {
        code: "IL",
        name: "Israel",
        length: 23,
        bban_format: "4c,15n",
        layout: "ILkk bbbb cccc cccc cccc ccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "IM",
        name: "Isle of Man",
        length: 22,
        bban_format: "4a,14n",
        layout: "IMkk bbbb ssss sscc cccc cc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "IQ",
        name: "Iraq",
        length: 23,
        bban_format: "4c,15n",
        layout: "IQkk bbbb cccc cccc cccc ccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "IR",
        name: "Iran",
        length: 26,
        bban_format: "22n",
        layout: "IRkk pppp cccc cccc cccc cccc cc",
        notes: "p = Bank code; c = Account number",
    },
    CountryEntry {
        code: "IS",
        name: "Iceland",
        length: 26,
        bban_format: "22n",
        layout: "ISkk bbbb sscc cccc iiii iiii ii",
        notes: "b = National bank code s = Branch code c = Account number i = holder's kennitala (national identification number)",
    },
    CountryEntry {
        code: "IT",
        name: "Italy",
        length: 27,
        bban_format: "1a,10n,12c",
        layout: "ITkk xaaa aabb bbbc cccc cccc ccc",
        notes: "x = Check char (CIN) a = National bank code (it:Associazione bancaria italiana or Codice ABI ) b = Branch code (it:Coordinate bancarie or CAB – Codice d'Avviamento Bancario) c = Account number",
    },
    CountryEntry {
        code: "JE",
        name: "Jersey",
        length: 22,
        bban_format: "4a,14n",
        layout: "JEkk bbbb ssss sscc cccc cc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "JO",
        name: "Jordan",
        length: 30,
        bban_format: "4a,22n",
        layout: "JOkk bbbb nnnn cccc cccc cccc cccc cc",
        notes: "b = National bank code n = Branch code c = Account number",
    },
    CountryEntry {
        code: "KM",
        name: "Comoros",
        length: 27,
        bban_format: "23n",
        layout: "KMkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "KW",
        name: "Kuwait",
        length: 30,
        bban_format: "4a,22c",
        layout: "KWkk bbbb cccc cccc cccc cccc cccc cc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "KZ",
        name: "Kazakhstan",
        length: 20,
        bban_format: "3n,13c",
        layout: "KZkk bbbc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "LB",
        name: "Lebanon",
        length: 28,
        bban_format: "4n,20c",
        layout: "LBkk bbbb cccc cccc cccc cccc cccc",
        notes: "b = Bank code; c = Account number",
    },
    CountryEntry {
        code: "LC",
        name: "Saint Lucia",
        length: 32,
        bban_format: "4c,24n",
        layout: "LCkk bbbb cccc cccc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "LI",
        name: "Liechtenstein",
        length: 21,
        bban_format: "5n,12c",
        layout: "LIkk bbbb bccc cccc cccc c",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "LT",
        name: "Lithuania",
        length: 20,
        bban_format: "16n",
        layout: "LTkk bbbb bccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "LU",
        name: "Luxembourg",
        length: 20,
        bban_format: "3n,13c",
        layout: "LUkk bbbc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "LV",
        name: "Latvia",
        length: 21,
        bban_format: "4a,13c",
        layout: "LVkk bbbb cccc cccc cccc c",
        notes: "b = BIC Bank code c = Account number",
    },
    CountryEntry {
        code: "MA",
        name: "Morocco",
        length: 28,
        bban_format: "24n",
        layout: "MAkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "MC",
        name: "Monaco",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "MCkk bbbb bsss sscc cccc cccc cxx",
        notes: "b = National bank code s = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)",
    },
    CountryEntry {
        code: "MD",
        name: "Moldova",
        length: 24,
        bban_format: "2c,18c",
        layout: "MDkk bbcc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "ME",
        name: "Montenegro",
        length: 22,
        bban_format: "18n",
        layout: "MEkk bbbc cccc cccc cccc xx",
        notes: "k = IBAN check digits (always = '25') b = Bank code c = Account number x = National check digits",
    },
    CountryEntry {
        code: "MF",
        name: "Saint Martin",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "MFkk bbbb bsss sscc cccc cccc cxx",
        notes: "b = Bank code; s = Branch code; c = Account number; x = National check digits",
    },
    CountryEntry {
        code: "MG",
        name: "Madagascar",
        length: 27,
        bban_format: "23n",
        layout: "MGkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "MK",
        name: "Macedonia",
        length: 19,
        bban_format: "3n,10c,2n",
        layout: "MKkk bbbc cccc cccc cxx",
        notes: "k = IBAN check digits (always = '07') b = National bank code c = Account number x = National check digits",
    },
    CountryEntry {
        code: "ML",
        name: "Mali",
        length: 28,
        bban_format: "24n",
        layout: "MLkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "MR",
        name: "Mauritania",
        length: 27,
        bban_format: "23n",
        layout: "MRkk bbbb bsss sscc cccc cccc cxx",
        notes: "k = IBAN check digits (always 13) b = National bank code s = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)",
    },
    CountryEntry {
        code: "MT",
        name: "Malta",
        length: 31,
        bban_format: "4a,5n,18c",
        layout: "MTkk bbbb ssss sccc cccc cccc cccc ccc",
        notes: "b = BIC bank code s = Branch code c = Account number",
    },
    CountryEntry {
        code: "MU",
        name: "Mauritius",
        length: 30,
        bban_format: "4a,19n,3a",
        layout: "MUkk bbbb bbss cccc cccc cccc 000d dd",
        notes: "b = National bank code s = Branch identifier c = Account number 0 = Zeroes d = Currency Symbol",
    },
    CountryEntry {
        code: "MZ",
        name: "Mozambique",
        length: 25,
        bban_format: "21n",
        layout: "MZkk bbbb ssss cccc cccc cccx x",
        notes: "b = Bank code; s = Branch code; c = Account number; x = Check digit",
    },
    CountryEntry {
        code: "NE",
        name: "Niger",
        length: 28,
        bban_format: "24n",
        layout: "NEkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "NI",
        name: "Nicaragua",
        length: 32,
        bban_format: "28n",
        layout: "NIkk bbbb ssss cccc cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "NL",
        name: "Netherlands",
        length: 18,
        bban_format: "4a,10n",
        layout: "NLkk bbbb cccc cccc cc",
        notes: "b = BIC Bank code c = Account number",
    },
    CountryEntry {
        code: "NO",
        name: "Norway",
        length: 15,
        bban_format: "11n",
        layout: "NOkk bbbb cccc ccx",
        notes: "b = National bank code c = Account number x = Modulo-11 national check digit",
    },
    CountryEntry {
        code: "PK",
        name: "Pakistan",
        length: 24,
        bban_format: "4c,16n",
        layout: "PKkk bbbb cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "PL",
        name: "Poland",
        length: 28,
        bban_format: "24n",
        layout: "PLkk bbbs sssx cccc cccc cccc cccc",
        notes: "b = National bank code s = Branch code x = National check digit c = Account number",
    },
    CountryEntry {
        code: "PS",
        name: "Palestinian territories",
        length: 29,
        bban_format: "4c,21n",
        layout: "PSkk bbbb xxxx xxxx xccc cccc cccc c",
        notes: "b = National bank code c = Account number x = Not specified",
    },
    CountryEntry {
        code: "PT",
        name: "Portugal",
        length: 25,
        bban_format: "21n",
        layout: "PTkk bbbb ssss cccc cccc cccx x",
        notes: "k = IBAN check digits (always = '50') b = National bank code s = Branch code c = Account number x = National check digit",
    },
    CountryEntry {
        code: "QA",
        name: "Qatar",
        length: 29,
        bban_format: "4a,21c",
        layout: "QAkk bbbb cccc cccc cccc cccc cccc c",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "RE",
        name: "Réunion",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "REkk bbbb bsss sscc cccc cccc cxx",
        notes: "b = Bank code; s = Branch code; c = Account number; x = National check digits",
    },
    CountryEntry {
        code: "RO",
        name: "Romania",
        length: 24,
        bban_format: "4a,16c",
        layout: "ROkk bbbb cccc cccc cccc cccc",
        notes: "b = BIC Bank code c = Branch code and account number (bank-specific format)",
    },
    CountryEntry {
        code: "RS",
        name: "Serbia",
        length: 22,
        bban_format: "18n",
        layout: "RSkk bbbc cccc cccc cccc xx",
        notes: "b = National bank code c = Account number x = Account check digits",
    },
    CountryEntry {
        code: "SA",
        name: "Saudi Arabia",
        length: 24,
        bban_format: "2n,18c",
        layout: "SAkk bbcc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number preceded by zeros, if required",
    },
    CountryEntry {
        code: "SC",
        name: "Seychelles",
        length: 31,
        bban_format: "4c,23n",
        layout: "SCkk bbbb cccc cccc cccc cccc cccc mmm",
        notes: "b = National bank code c = Account number m = Currency",
    },
    CountryEntry {
        code: "SE",
        name: "Sweden",
        length: 24,
        bban_format: "20n",
        layout: "SEkk bbbc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "SI",
        name: "Slovenia",
        length: 19,
        bban_format: "15n",
        layout: "SIkk bbss sccc cccc cxx",
        notes: "k = IBAN check digits (always = '56') b = National bank code s = Branch code c = Account number x = National check digits",
    },
    CountryEntry {
        code: "SK",
        name: "Slovakia",
        length: 24,
        bban_format: "20n",
        layout: "SKkk bbbb ssss sscc cccc cccc",
        notes: "b = National bank code s = Account number prefix c = Account number",
    },
    CountryEntry {
        code: "SM",
        name: "San Marino",
        length: 27,
        bban_format: "1a,10n,12c",
        layout: "SMkk xaaa aabb bbbc cccc cccc ccc",
        notes: "x = Check char (it:CIN) a = National bank code (it:Associazione bancaria italiana or Codice ABI) b = Branch code (it:Coordinate bancarie or CAB – Codice d'Avviamento Bancario) c = Account number",
    },
    CountryEntry {
        code: "SN",
        name: "Senegal",
        length: 28,
        bban_format: "24n",
        layout: "SNkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "ST",
        name: "Sao Tome and Principe",
        length: 25,
        bban_format: "4c,17n",
        layout: "STkk bbbb cccc cccc cccc cccc c",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "SV",
        name: "El Salvador",
        length: 28,
        bban_format: "4c,20n",
        layout: "SVkk bbbb cccc cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "TD",
        name: "Chad",
        length: 27,
        bban_format: "23n",
        layout: "TDkk bbbb ssss cccc cccc cccc ccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "TG",
        name: "Togo",
        length: 28,
        bban_format: "24n",
        layout: "TGkk bbbb ssss cccc cccc cccc cccc",
        notes: "b = Bank code; s = Branch code; c = Account number",
    },
    CountryEntry {
        code: "TL",
        name: "East Timor",
        length: 23,
        bban_format: "19n",
        layout: "TLkk bbbc cccc cccc cccc cxx",
        notes: "k = IBAN check digits (always = '38') b = Bank identifier c = Account number x = National check digit",
    },
    CountryEntry {
        code: "TN",
        name: "Tunisia",
        length: 24,
        bban_format: "20n",
        layout: "TNkk bbss sccc cccc cccc cccc",
        notes: "k = IBAN check digits (always 59) b = National bank code s = Branch code c = Account number",
    },
    CountryEntry {
        code: "TR",
        name: "Turkey",
        length: 26,
        bban_format: "5n,17c",
        layout: "TRkk bbbb bxcc cccc cccc cccc cc",
        notes: "b = National bank code x = Reserved for future use (currently '0') c = Account number",
    },
    CountryEntry {
        code: "UA",
        name: "Ukraine",
        length: 29,
        bban_format: "4c,21n",
        layout: "UAkk bbbb cccc cccc cccc cccc cccc c",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "VA",
        name: "Vatican",
        length: 22,
        bban_format: "3n,15n",
        layout: "VAkk bbb cccc cccc cccc ccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "VG",
        name: "Virgin Islands, British",
        length: 24,
        bban_format: "4c,16n",
        layout: "VGkk bbbb cccc cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "XK",
        name: "Kosovo",
        length: 20,
        bban_format: "4n,10n,2n",
        layout: "XKkk bbbb cccc cccc cccc",
        notes: "b = National bank code c = Account number",
    },
    CountryEntry {
        code: "YT",
        name: "Mayotte",
        length: 27,
        bban_format: "10n,11c,2n",
        layout: "YTkk bbbb bsss sscc cccc cccc cxx",
        notes: "b = Bank code; s = Branch code; c = Account number; x = National check digits",
    },
];
