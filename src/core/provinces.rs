//! INE province codes, Ceuta and Melilla included.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::models::Province;

pub const PROVINCES: [Province; 52] = [
    Province { code: "01", name: "Álava/Araba" },
    Province { code: "02", name: "Albacete" },
    Province { code: "03", name: "Alicante/Alacant" },
    Province { code: "04", name: "Almería" },
    Province { code: "05", name: "Ávila" },
    Province { code: "06", name: "Badajoz" },
    Province { code: "07", name: "Illes Balears" },
    Province { code: "08", name: "Barcelona" },
    Province { code: "09", name: "Burgos" },
    Province { code: "10", name: "Cáceres" },
    Province { code: "11", name: "Cádiz" },
    Province { code: "12", name: "Castellón/Castelló" },
    Province { code: "13", name: "Ciudad Real" },
    Province { code: "14", name: "Córdoba" },
    Province { code: "15", name: "A Coruña" },
    Province { code: "16", name: "Cuenca" },
    Province { code: "17", name: "Girona" },
    Province { code: "18", name: "Granada" },
    Province { code: "19", name: "Guadalajara" },
    Province { code: "20", name: "Gipuzkoa" },
    Province { code: "21", name: "Huelva" },
    Province { code: "22", name: "Huesca" },
    Province { code: "23", name: "Jaén" },
    Province { code: "24", name: "León" },
    Province { code: "25", name: "Lleida" },
    Province { code: "26", name: "La Rioja" },
    Province { code: "27", name: "Lugo" },
    Province { code: "28", name: "Madrid" },
    Province { code: "29", name: "Málaga" },
    Province { code: "30", name: "Murcia" },
    Province { code: "31", name: "Navarra" },
    Province { code: "32", name: "Ourense" },
    Province { code: "33", name: "Asturias" },
    Province { code: "34", name: "Palencia" },
    Province { code: "35", name: "Las Palmas" },
    Province { code: "36", name: "Pontevedra" },
    Province { code: "37", name: "Salamanca" },
    Province { code: "38", name: "Santa Cruz de Tenerife" },
    Province { code: "39", name: "Cantabria" },
    Province { code: "40", name: "Segovia" },
    Province { code: "41", name: "Sevilla" },
    Province { code: "42", name: "Soria" },
    Province { code: "43", name: "Tarragona" },
    Province { code: "44", name: "Teruel" },
    Province { code: "45", name: "Toledo" },
    Province { code: "46", name: "Valencia/València" },
    Province { code: "47", name: "Valladolid" },
    Province { code: "48", name: "Bizkaia" },
    Province { code: "49", name: "Zamora" },
    Province { code: "50", name: "Zaragoza" },
    Province { code: "51", name: "Ceuta" },
    Province { code: "52", name: "Melilla" },
];

static BY_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PROVINCES.iter().map(|p| (p.code, p.name)).collect());

/// Looks up a two-digit code such as `"08"`.
pub fn province_name(code: &str) -> Option<&'static str> {
    BY_CODE.get(code).copied()
}

/// Left-pads a raw province code with zeros to two characters.
pub fn pad_province_code(raw: &str) -> String {
    format!("{:0>2}", raw.trim())
}
