// src/noyau/moteur/jetons.rs

use super::ErreurMoteur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Identifiant normalisé en minuscules; to_rpn décidera si c'est une
    // fonction (selon le Contexte) ou un paramètre.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Comma, // séparateur d'arguments

    LPar,
    RPar,

    /// RPN seulement : appel de fonction avec son arité (jamais émis par
    /// tokenize, construit par to_rpn à la parenthèse fermante).
    Call(String, usize),
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres: entiers, décimaux ("123.", ".5" exclu — toujours "0.5" ici),
///   exposant optionnel (1.234568E15, 2.5e-3)
/// - opérateurs + - * / ^ et la virgule d'arguments
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurMoteur> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + virgule
        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Comma);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(mot.to_lowercase()));
            continue;
        }

        // Nombre : chiffres [. chiffres] [eE [+-] chiffres]
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie fractionnaire ("123." accepté : fin de saisie)
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant seulement si e/E est bien suivi de chiffres
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let valeur: f64 = texte
                .parse()
                .map_err(|_| ErreurMoteur::Syntaxe(format!("nombre invalide: {texte}")))?;
            out.push(Tok::Num(valeur));
            continue;
        }

        return Err(ErreurMoteur::Syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}
