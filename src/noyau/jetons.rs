// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurNoyau;

/// Délimiteur de champ : exactement UN espace entre deux jetons.
/// Ce n’est pas de la mise en page : `tokenize` découpe dessus.
pub const SEPARATEUR: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    /// `*` `/` = 2, `+` `-` = 1. Aucun opérateur associatif à droite.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
        }
    }

    /// Arithmétique flottante brute : `x / 0` donne ±inf ou NaN, pas d’erreur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Minus => a - b,
            Op::Star => a * b,
            Op::Slash => a / b,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Accepte la forme nue (`"+"`) ou la forme “touche” avec espaces (`" + "`).
impl FromStr for Op {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Op::Plus),
            "-" => Ok(Op::Minus),
            "*" => Ok(Op::Star),
            "/" => Ok(Op::Slash),
            _ => Err(ErreurNoyau::JetonInvalide(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Numéral gardé sous forme texte (peut être en cours de saisie : "12.").
    Num(String),
    Op(Op),
}

impl Tok {
    pub fn est_op(&self) -> bool {
        matches!(self, Tok::Op(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Lit un numéral. `None` si le texte n’est pas un nombre fini
/// ("." seul, "inf", "NaN"...). "0" et "-0" sont des numéraux valides.
pub fn parse_nombre(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Découpe une chaîne en jetons sur le délimiteur `SEPARATEUR`.
///
/// Un opérateur “collé” à ses espaces (`"5 + "`) laisse un champ vide en fin
/// de chaîne : il est refusé ici, l’appelant doit fournir une expression close.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    s.split(SEPARATEUR)
        .map(|champ| {
            if parse_nombre(champ).is_some() {
                return Ok(Tok::Num(champ.to_string()));
            }
            match champ {
                "+" | "-" | "*" | "/" => champ.parse::<Op>().map(Tok::Op),
                _ => Err(ErreurNoyau::JetonInvalide(champ.to_string())),
            }
        })
        .collect()
}

/// Jetons -> texte, séparés par un seul espace (frontière de sérialisation).
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = String::new();
    for (i, t) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATEUR);
        }
        out.push_str(&t.to_string());
    }
    out
}
