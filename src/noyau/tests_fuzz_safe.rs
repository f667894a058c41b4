//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler les deux entrées publiques sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, et une réponse toujours “bien formée”
//!   (ok => champs de succès présents, échec => seulement `error`)

use std::time::{Duration, Instant};

use super::solveur::{ReponseEquation, ReponseExpression};
use super::{solve_equation, solve_expression};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants de forme ------------------------ */

fn check_forme_expression(entree: &str, r: &ReponseExpression) {
    if r.ok {
        assert_eq!(r.expression.as_deref(), Some(entree));
        assert!(r.steps.is_some(), "ok sans steps: {entree:?}");
        assert!(r.result.is_some(), "ok sans result: {entree:?}");
        assert!(r.error.is_none());
    } else {
        assert!(r.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(r.expression.is_none() && r.steps.is_none() && r.result.is_none());
    }
}

fn check_forme_equation(entree: &str, r: &ReponseEquation) {
    if r.ok {
        assert_eq!(r.equation.as_deref(), Some(entree));
        assert!(r.x.is_some());
        assert!(r.error.is_none());
    } else {
        assert!(r.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(r.equation.is_none() && r.x.is_none());
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        3 => format!(".{}", rng.pick(10)),
        4 => format!("{}", rng.pick(100_000)),
        _ => "1".to_string(),
    }
}

/// Expressions syntaxiquement valides (parenthèses équilibrées, opérateurs bien placés).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let g = gen_expr(rng, depth - 1);
    let d = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("({g}+{d})"),
        2 => format!("({g}-{d})"),
        3 => format!("{g}*{d}"),
        4 => format!("({g})/({d})"),
        5 => format!("({g})^({})", gen_nombre(rng)),
        6 => format!("-({g})"),
        _ => format!(" {g} + {d} "),
    }
}

/// Bruit : caractères de l'alphabet (et quelques intrus) dans n'importe quel ordre.
fn gen_bruit(rng: &mut Rng, alphabet: &[char], longueur: usize) -> String {
    (0..longueur)
        .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_valides_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let r = solve_expression(&expr);
        assert!(r.ok, "expr valide refusée: {expr:?} err={:?}", r.error);
        check_forme_expression(&expr, &r);
    }
}

#[test]
fn fuzz_safe_bruit_expression_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let alphabet: Vec<char> = "0123456789.+-*/^()  ax=é".chars().collect();
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, &alphabet, longueur);
        let r = solve_expression(&expr);
        check_forme_expression(&expr, &r);

        if r.ok {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }

        // déterminisme : même entrée => même réponse
        let r2 = solve_expression(&expr);
        assert_eq!(r.error, r2.error);
        assert_eq!(r.steps, r2.steps);
    }

    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(seen_ok + seen_err == 400);
}

#[test]
fn fuzz_safe_bruit_equation_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let alphabet: Vec<char> = "0123456789.+-xX=  *y".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(10) as usize;
        let mut eq = gen_bruit(&mut rng, &alphabet, longueur);
        if rng.coin() {
            // forme plus plausible : gauche = nombre
            eq = format!("{eq}={}", gen_nombre(&mut rng));
        }

        let r = solve_equation(&eq);
        check_forme_equation(&eq, &r);
        if r.ok {
            seen_ok += 1;
        }
    }

    // Pas d'exigence forte sur les succès : seulement aucune panique et des réponses bien formées.
    assert!(seen_ok <= 400);
}

#[test]
fn fuzz_safe_equations_construites() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..150 {
        budget(t0, max);

        // a·x + b = rhs avec a entier non nul
        let a = 1 + rng.pick(9) as i64;
        let a = if rng.coin() { -a } else { a };
        let b = rng.pick(50) as i64 - 25;
        let rhs = rng.pick(200) as i64 - 100;

        let eq = format!("{a}x{b:+}={rhs}");
        let r = solve_equation(&eq);
        assert!(r.ok, "eq={eq:?} err={:?}", r.error);

        let x = r.x.unwrap_or(f64::NAN);
        let attendu = (rhs - b) as f64 / a as f64;
        assert!((x - attendu).abs() < 1e-12, "eq={eq:?} x={x} attendu={attendu}");
    }
}
