//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> postfix -> valeur flottante brute
//!
//! Remarque : aucun arrondi ici. L’arrondi d’affichage vit dans format.rs,
//! la décision “non fini = erreur” vit dans la calculatrice.

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::{eval_postfix, to_postfix};

/// Démarche d’un calcul (panneau d’explication).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Demarche {
    pub infixe: String,
    pub postfix: String,
    pub valeur: f64,
}

/// API publique : `eval_postfix(to_postfix(expr))`.
///
/// L’expression doit être close (pas d’opérateur final). Division par zéro :
/// rend inf/NaN, pas d’erreur.
///
/// La vue passe par `Calculatrice` (jetons déjà typés) : hors tests, rien
/// dans ce binaire n’appelle cette forme texte.
#[allow(dead_code)]
pub fn calculate(expr: &str) -> Result<f64, ErreurNoyau> {
    let jetons = tokenize(expr)?;
    eval_tokens(&jetons).map(|d| d.valeur)
}

/// Même pipeline, sur des jetons déjà typés, en gardant la démarche.
pub fn eval_tokens(jetons: &[Tok]) -> Result<Demarche, ErreurNoyau> {
    if jetons.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    let postfix = to_postfix(jetons);
    let valeur = eval_postfix(&postfix)?;

    Ok(Demarche {
        infixe: format_tokens(jetons),
        postfix: format_tokens(&postfix),
        valeur,
    })
}
