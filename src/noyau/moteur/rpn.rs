// src/noyau/moteur/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN par pile, dans le Contexte
//
// Règles:
// - Ident(name):
//    - si le contexte connaît une fonction de ce nom => appel (arité comptée
//      via les virgules, émis en Tok::Call à la parenthèse fermante)
//    - sinon => paramètre (résolu à l'évaluation)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 et on
//      n'expulse rien de la pile : "5*-3" => "5 0 3 - *"
// - '^' associatif à droite; les fonctions restent collées à leur argument.

use super::jetons::Tok;
use super::{Contexte, ErreurMoteur};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Ident("pi"), Slash, Num(2), RPar]
///   rpn:    [Ident("pi"), Num(2), Slash, Call("sin", 1)]
pub fn to_rpn(tokens: &[Tok], ctx: &Contexte) -> Result<Vec<Tok>, ErreurMoteur> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Arités des fonctions actuellement sur la pile (les appels se ferment
    // en LIFO, la pile suffit).
    let mut arites: Vec<usize> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if ctx.connait_fonction(&name) {
                    // fonction : sur la pile, sortira après son argument
                    ops.push(Tok::Ident(name));
                    arites.push(1);
                    prev_was_value = false;
                } else {
                    // paramètre : sortie directe
                    out.push(Tok::Ident(name));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Comma => {
                // dépile jusqu'à la '(' de l'appel englobant
                loop {
                    match ops.last() {
                        Some(Tok::LPar) => break,
                        Some(_) => out.push(ops.pop().unwrap()),
                        None => {
                            return Err(ErreurMoteur::Syntaxe(
                                "virgule hors d'un appel de fonction".into(),
                            ))
                        }
                    }
                }
                match arites.last_mut() {
                    Some(n) => *n += 1,
                    None => {
                        return Err(ErreurMoteur::Syntaxe(
                            "virgule hors d'un appel de fonction".into(),
                        ))
                    }
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => {
                            return Err(ErreurMoteur::Syntaxe("parenthèse fermante isolée".into()))
                        }
                    }
                }

                // si une fonction est au sommet, son appel se ferme ici
                if let Some(Tok::Ident(_)) = ops.last() {
                    if let Some(Tok::Ident(name)) = ops.pop() {
                        let arite = arites.pop().unwrap_or(1);
                        out.push(Tok::Call(name, arite));
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Caret => {
                depiler_operateurs(&mut out, &mut ops, &tok);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    // moins binaire : traitement standard
                    depiler_operateurs(&mut out, &mut ops, &Tok::Minus);
                } else {
                    // moins unaire : injecte 0 comme opérande gauche, sans
                    // expulser l'opérateur du dessus (il garde la main)
                    out.push(Tok::Num(0.0));
                }
                ops.push(Tok::Minus);
                prev_was_value = false;
            }

            Tok::Call(..) => {
                return Err(ErreurMoteur::Syntaxe("jeton RPN inattendu en entrée".into()))
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match op {
            Tok::LPar => return Err(ErreurMoteur::Syntaxe("parenthèses non fermées".into())),
            Tok::Ident(name) => {
                // appel jamais fermé (normalement évité par l'auto-fermeture
                // en amont) : on le clôt avec l'arité comptée
                let arite = arites.pop().unwrap_or(1);
                out.push(Tok::Call(name, arite));
            }
            _ => out.push(op),
        }
    }

    Ok(out)
}

/// Dépile tant que:
/// - on n'est pas bloqué par '('
/// - on ne traverse pas une fonction (elle reste collée à son argument)
/// - la précédence/associativité exige de sortir l'opérateur du haut
fn depiler_operateurs(out: &mut Vec<Tok>, ops: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar | Tok::Ident(_)) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Évalue une RPN par pile de valeurs.
pub fn eval_rpn(rpn: &[Tok], ctx: &Contexte) -> Result<f64, ErreurMoteur> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(x) => pile.push(*x),

            Tok::Ident(name) => {
                let valeur = ctx
                    .parametre(name)
                    .ok_or_else(|| ErreurMoteur::ParametreInconnu(name.clone()))?;
                pile.push(valeur);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = pile
                    .pop()
                    .ok_or_else(|| ErreurMoteur::Syntaxe("expression invalide".into()))?;
                let a = pile
                    .pop()
                    .ok_or_else(|| ErreurMoteur::Syntaxe("expression invalide".into()))?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurMoteur::DivisionParZero);
                        }
                        a / b
                    }
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            Tok::Call(name, arite) => {
                if pile.len() < *arite {
                    return Err(ErreurMoteur::Syntaxe("fonction sans argument".into()));
                }
                let depart = pile.len() - arite;
                let args: Vec<f64> = pile.split_off(depart);
                pile.push(ctx.appeler(name, &args)?);
            }

            Tok::Comma | Tok::LPar | Tok::RPar => {
                return Err(ErreurMoteur::Syntaxe("jeton inattendu en RPN".into()))
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurMoteur::Syntaxe("expression invalide".into()));
    }
    Ok(pile.pop().unwrap())
}
