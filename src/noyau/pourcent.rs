// src/noyau/pourcent.rs
//
// Réécriture des % dans la chaîne évaluable, juste avant l'évaluation.
//
// Chaque % final devient une division par 100 de l'opérande qui le précède:
//   "50%"      -> "(50/100.0)"
//   "(2+3)%"   -> "((2+3)/100.0)"
//   "Sin(30)%" -> "(Sin(30)/100.0)"
//
// L'opérande est délimité en remontant depuis le % : on s'arrête sur un
// opérateur binaire, une virgule, une '(' non appariée, ou le début de
// chaîne, en respectant l'équilibre des parenthèses. Un % sans opérande
// exploitable est simplement abandonné (repli silencieux, pas d'erreur).
//
// NB: la chaîne évaluable est ASCII par construction (les glyphes ne vivent
// que côté affichage).

/// Réécrit tous les % de la chaîne, du dernier au premier.
pub fn reecrire_pourcents(chaine: &str) -> String {
    let mut chaine = chaine.to_string();

    while let Some(idx) = chaine.rfind('%') {
        let avant = &chaine[..idx];
        let debut = debut_operande(avant);
        let operande = &avant[debut..];

        if operande.is_empty() {
            // % orphelin : abandonné plutôt que d'échouer l'évaluation
            chaine.remove(idx);
            continue;
        }

        chaine = format!(
            "{}({}/100.0){}",
            &chaine[..debut],
            operande,
            &chaine[idx + 1..]
        );
    }

    chaine
}

/// Indice de début de l'opérande qui termine `s`.
fn debut_operande(s: &str) -> usize {
    let mut balance: usize = 0;

    for (i, c) in s.char_indices().rev() {
        match c {
            ')' => balance += 1,
            '(' => {
                if balance == 0 {
                    // '(' non appariée : l'opérande commence juste après
                    return i + 1;
                }
                balance -= 1;
            }
            '+' | '-' | '*' | '/' | '^' | ',' if balance == 0 => {
                return i + 1;
            }
            _ => {}
        }
    }
    0
}
