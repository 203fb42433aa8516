//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine d’état et l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariant clé : l’expression alterne toujours Num, Op, Num, ...
//! - invariant clé : une édition ignorée ne touche à rien

use std::time::{Duration, Instant};

use super::calculatrice::{Calculatrice, Edition};
use super::erreur::ErreurNoyau;
use super::eval::calculate;
use super::jetons::{Op, Tok};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const OPS: [Op; 4] = [Op::Plus, Op::Minus, Op::Star, Op::Slash];

/// Une touche au hasard, appliquée. Renvoie (nom, issue).
fn touche_au_hasard(rng: &mut Rng, c: &mut Calculatrice) -> (&'static str, Result<Edition, ErreurNoyau>) {
    match rng.pick(20) {
        0..=9 => {
            let d = char::from_digit(rng.pick(10), 10).unwrap_or('0');
            ("add_digit", Ok(c.add_digit(d)))
        }
        10 => ("add_digit", Ok(c.add_digit('.'))),
        11..=14 => ("add_operator", Ok(c.add_operator(OPS[rng.pick(4) as usize]))),
        15 => ("toggle_sign", Ok(c.toggle_sign())),
        16 => ("percentage", Ok(c.percentage())),
        17 => ("evaluate", c.evaluate()),
        18 => ("delete_last", Ok(c.delete_last())),
        _ => {
            // clear rare : sinon on ne construit jamais d’expressions longues
            if rng.pick(4) == 0 {
                ("clear", Ok(c.clear()))
            } else {
                ("add_digit", Ok(c.add_digit('1')))
            }
        }
    }
}

fn check_alternance(c: &Calculatrice) {
    for (i, t) in c.jetons().iter().enumerate() {
        let attendu_op = i % 2 == 1;
        assert_eq!(
            t.est_op(),
            attendu_op,
            "alternance cassée en {i}: expr={:?}",
            c.expr()
        );
        if let Tok::Num(n) = t {
            assert!(!n.is_empty(), "numéral vide: expr={:?}", c.expr());
        }
    }
}

/// Référence naïve : produits/quotients d’abord, puis sommes, de gauche à droite.
fn reference(nombres: &[f64], ops: &[Op]) -> f64 {
    let mut termes: Vec<f64> = vec![nombres[0]];
    let mut signes: Vec<Op> = Vec::new();

    for (op, &x) in ops.iter().zip(&nombres[1..]) {
        match op {
            Op::Star | Op::Slash => {
                let dernier = termes.last_mut().unwrap();
                *dernier = op.appliquer(*dernier, x);
            }
            Op::Plus | Op::Minus => {
                signes.push(*op);
                termes.push(x);
            }
        }
    }

    let mut acc = termes[0];
    for (op, &t) in signes.iter().zip(&termes[1..]) {
        acc = op.appliquer(acc, t);
    }
    acc
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_touches_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut c = Calculatrice::new();

    let mut seen_applied = 0usize;
    let mut seen_ignored = 0usize;
    let mut seen_eval = 0usize;

    for _ in 0..4000 {
        budget(t0, max);

        let avant = c.clone();
        let (nom, issue) = touche_au_hasard(&mut rng, &mut c);

        match issue {
            Ok(Edition::Ignoree) => {
                assert_eq!(c, avant, "{nom} ignorée mais état modifié");
                seen_ignored += 1;
            }
            Ok(Edition::Appliquee) => {
                if nom == "add_digit" {
                    assert!(c.expr().chars().count() <= c.reglages().longueur_max);
                }
                if nom == "evaluate" {
                    assert!(c.just_evaluated());
                    assert_eq!(c.jetons().len(), 1);
                    seen_eval += 1;
                }
                seen_applied += 1;
            }
            Err(e) => {
                // structure toujours valide => seules ces erreurs sont possibles
                assert!(
                    matches!(e, ErreurNoyau::NonFini(_) | ErreurNoyau::JetonInvalide(_)),
                    "erreur non attendue: {nom} expr={:?} err={e}",
                    avant.expr()
                );
                assert_eq!(c, avant, "{nom} en erreur mais état modifié");
            }
        }

        check_alternance(&c);
        assert!(!c.expr().starts_with(' '));
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_applied > 100, "trop peu d’éditions: {seen_applied}");
    assert!(seen_ignored > 0, "aucune édition ignorée: fuzz trop “sage”");
    assert!(seen_eval > 10, "trop peu d’évaluations: {seen_eval}");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut c = Calculatrice::new();
        for _ in 0..500 {
            let _ = touche_au_hasard(&mut rng, &mut c);
        }
        c.expr()
    };
    assert_eq!(rejoue(0xBADC0DE), rejoue(0xBADC0DE));
}

#[test]
fn fuzz_safe_calcul_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let n = 1 + rng.pick(6) as usize;
        let nombres: Vec<f64> = (0..n).map(|_| rng.pick(19) as f64 - 9.0).collect();
        let ops: Vec<Op> = (1..n).map(|_| OPS[rng.pick(4) as usize]).collect();

        let mut expr = super::format::format_nombre(nombres[0]);
        for (op, x) in ops.iter().zip(&nombres[1..]) {
            expr.push_str(&format!(" {op} {}", super::format::format_nombre(*x)));
        }

        let attendu = reference(&nombres, &ops);
        let obtenu = calculate(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        if attendu.is_nan() {
            assert!(obtenu.is_nan(), "expr={expr:?} obtenu={obtenu}");
        } else {
            assert_eq!(obtenu, attendu, "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["1"; 5000].join(" + ");
    assert_eq!(calculate(&expr), Ok(5000.0));

    let expr = vec!["2"; 40].join(" * ");
    assert_eq!(calculate(&expr), Ok(2f64.powi(40)));

    budget(t0, max);
}
