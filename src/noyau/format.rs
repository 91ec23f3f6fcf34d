// src/noyau/format.rs
//
// Formatage du résultat numérique (f64 -> texte affichable).
//
// Règles:
// - NaN / infini                    => DepassementNumerique
// - |d| > 1e12 ou 0 < |d| < 1e-9    => notation scientifique, 6 décimales
// - sinon                           => ~10 chiffres significatifs, zéros de
//   fin et point final retirés; une valeur entière (dans i64) s'affiche
//   sans partie fractionnaire
// - forme vide / "-" / "." / "-0"   => "0"

use super::erreurs::ErreurCalc;

/// Seuil haut : au-delà, notation scientifique.
const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e12;

/// Seuil bas : en-deçà (hors zéro), notation scientifique.
const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-9;

/// Chiffres significatifs du format général.
const CHIFFRES_SIGNIFICATIFS: i32 = 10;

pub fn formater_resultat(d: f64) -> Result<String, ErreurCalc> {
    if d.is_nan() || d.is_infinite() {
        return Err(ErreurCalc::DepassementNumerique);
    }

    if d.abs() > SEUIL_SCIENTIFIQUE_HAUT || (d != 0.0 && d.abs() < SEUIL_SCIENTIFIQUE_BAS) {
        return Ok(format!("{d:.6E}"));
    }

    let mut texte = format_general(d);

    // nettoyage décimal : "2.5000" -> "2.5", "2." -> "2"
    if texte.contains('.') {
        texte = texte
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    // valeur entière dans i64 : sans partie fractionnaire (et "-0" -> "0")
    if let Ok(v) = texte.parse::<f64>() {
        if v == v.trunc() && v.abs() < i64::MAX as f64 {
            texte = (v as i64).to_string();
        }
    }

    if texte.is_empty() || texte == "-" || texte == "." || texte == "-0" {
        texte = "0".to_string();
    }

    Ok(texte)
}

/// Format général : ~10 chiffres significatifs, en positionnel.
fn format_general(d: f64) -> String {
    if d == 0.0 {
        return "0".to_string();
    }

    // nombre de décimales pour atteindre 10 chiffres significatifs
    let exposant = d.abs().log10().floor() as i32;
    let decimales = (CHIFFRES_SIGNIFICATIFS - 1 - exposant).clamp(0, 17) as usize;
    format!("{d:.decimales$}")
}
