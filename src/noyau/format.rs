// src/noyau/format.rs

use super::calculatrice::Reglages;

/* ------------------------ Nombres ------------------------ */

/// Exposant décimal à partir duquel `format_nombre` passe en notation e.
const EXPOSANT_MAX_DECIMAL: i32 = 21;

/// Exposant décimal sous lequel `format_nombre` passe en notation e.
const EXPOSANT_MIN_DECIMAL: i32 = -6;

/// Texte canonique d’un nombre : chiffres les plus courts qui se relisent à
/// l’identique, en notation e si l’exposant sort de [-6, 21[ (5e-24, -1e+24).
/// Jamais "-0".
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    // "{:e}" sans précision = chiffres les plus courts ("5e-24", "1.5e3")
    let court = format!("{v:e}");
    let Some((mantisse, exp)) = court.split_once('e') else {
        return format!("{v}");
    };
    match exp.parse::<i32>() {
        Ok(e) if e >= EXPOSANT_MAX_DECIMAL => format!("{mantisse}e+{e}"),
        Ok(e) if e < EXPOSANT_MIN_DECIMAL => format!("{mantisse}e{e}"),
        _ => format!("{v}"),
    }
}

/// Arrondi à `decimales` chiffres, demi vers +∞ (2.5 -> 3, -2.5 -> -2).
pub fn arrondir(v: f64, decimales: u32) -> f64 {
    let k = 10f64.powi(decimales as i32);
    let scale = v * k;
    if !scale.is_finite() {
        // trop grand pour avoir une partie décimale
        return v;
    }
    let r = (scale + 0.5).floor() / k;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Notation scientifique, exposant toujours signé : 1234567890 -> "1.23457e+9".
pub fn format_scientifique(v: f64, chiffres: usize) -> String {
    let s = format!("{:.*e}", chiffres, v);
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Résultat affiché après "=" : arrondi, puis scientifique au-delà du seuil.
pub fn format_resultat(v: f64, reglages: &Reglages) -> String {
    let r = arrondir(v, reglages.decimales);
    if r.abs() > reglages.seuil_scientifique {
        format_scientifique(r, reglages.chiffres_scientifiques)
    } else {
        format_nombre(r)
    }
}

/* ------------------------ Affichage “joli” ------------------------ */

/// Remplace les opérateurs ASCII par leurs glyphes typographiques (− × ÷).
/// Les espaces sont conservés tels quels.
pub fn format_affichage(expr: &str) -> String {
    expr.chars()
        .map(|c| match c {
            '-' => '−',
            '*' => '×',
            '/' => '÷',
            _ => c,
        })
        .collect()
}
