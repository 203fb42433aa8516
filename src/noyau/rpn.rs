// src/noyau/rpn.rs
//
// Shunting-yard (sans parenthèses) -> postfix -> valeur
// Objectif:
// - Convertir une suite infixe de Tok en postfix (RPN)
// - Puis l’évaluer avec une seule pile numérique
//
// Règles:
// - précédence égale => on dépile (associativité gauche stricte) :
//   "8 - 3 - 2" => "8 3 - 2 -"
// - division par zéro : résultat flottant (inf / NaN), pas d’erreur ici

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{parse_nombre, Op, Tok};

/// Convertit une suite infixe (Num, Op, Num, ..., Num) en postfix.
///
/// Exemple:
///   infixe:  [2, +, 3, *, 4]
///   postfix: [2, 3, 4, *, +]
pub fn to_postfix(infixe: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(infixe.len());
    let mut ops: Vec<Op> = Vec::new();

    for tok in infixe {
        match tok {
            Tok::Num(_) => out.push(tok.clone()),
            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(top));
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile (ordre LIFO)
    out.extend(ops.into_iter().rev().map(Tok::Op));

    debug!(jetons = out.len(), "postfix construit");
    out
}

/// Évalue une suite postfix. Le second dépilé est l’opérande GAUCHE.
pub fn eval_postfix(postfix: &[Tok]) -> Result<f64, ErreurNoyau> {
    let mut st: Vec<f64> = Vec::new();

    for tok in postfix {
        match tok {
            Tok::Num(s) => {
                let v = parse_nombre(s).ok_or_else(|| ErreurNoyau::JetonInvalide(s.clone()))?;
                st.push(v);
            }
            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                st.push(op.appliquer(a, b));
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurNoyau::ExpressionInvalide),
    }
}
