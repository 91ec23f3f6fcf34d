// src/noyau/operande.rs
//
// Extraction du dernier opérande : la plus petite suite de jetons en fin
// d'historique qui forme "la valeur qui vient d'être saisie".
//
// Sert aux boutons puissance (x², xʸ) pour envelopper l'opérande dans un
// appel Pow(...) sans re-parser l'expression.
//
// Balayage arrière avec balance signée:
// - fermante        => +1
// - ouvrante/appel  => -1 (ce sont des ouvertures, vues depuis la fin)
//
// Frontières (l'opérande les EXCLUT, le balayage s'arrête):
// - une ouverture rencontrée à balance 0 : elle englobe l'opérande
//   (groupe encore ouvert), elle n'en fait pas partie;
// - un opérateur binaire à balance 0 — y compris en tout premier jeton
//   balayé : un opérateur traînant signifie "pas d'opérande";
// - le début de l'historique (tout ce qui est accumulé est retourné).

use super::jetons::{Genre, Jeton};

/// Retourne le dernier opérande, dans l'ordre de saisie.
/// Séquence vide si l'historique est vide ou se termine par un opérateur.
pub fn extraire_dernier_operande(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut operande: Vec<Jeton> = Vec::new();
    let mut balance: usize = 0;

    for jeton in jetons.iter().rev() {
        match jeton.genre {
            Genre::Fermante => {
                balance += 1;
                operande.insert(0, jeton.clone());
            }

            Genre::Ouvrante | Genre::Fonction => {
                if balance == 0 {
                    // Ouverture d'un groupe englobant : frontière.
                    break;
                }
                balance -= 1;
                operande.insert(0, jeton.clone());
            }

            Genre::Operateur => {
                if balance == 0 {
                    // Opérateur binaire devant l'opérande : frontière.
                    break;
                }
                operande.insert(0, jeton.clone());
            }

            Genre::Nombre | Genre::Constante | Genre::PostfixeValeur => {
                operande.insert(0, jeton.clone());
            }
        }
    }

    operande
}
