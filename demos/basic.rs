use hyp0f1::*;

fn main() {
    // -- Elementary special cases --
    println!("=== Closed forms (f64) ===");
    let x = 1.3_f64;
    let q = x * x / 4.0;
    println!("0F1(1/2; x²/4)  = {}  (cosh x = {})", hyp0f1(0.5, q), x.cosh());
    println!("0F1(3/2; -x²/4) = {}  (sin x / x = {})", hyp0f1(1.5, -q), x.sin() / x);
    println!("0F1(-2; 3.7)    = {}  (pole order)", hyp0f1(-2.0, 3.7));

    // -- Regimes --
    println!("\n=== Regimes ===");
    for &(c, z) in &[
        (2.5_f64, 0.0_f64),
        (2.5, 1e-8),
        (2.5, 4.0),
        (2.5, -4.0),
        (300.0, 50.0),
        (200.0, -1.0),
    ] {
        let r = hyp0f1_raw(c, z);
        println!("0F1({c}; {z}) = {:.16e}  [{:?}]", r.value, r.regime);
    }

    // -- Boucher sphere amplitude --
    // A(q) = 0F1((α+1)/2; -(qR/2)²), which is 1 at q = 0
    println!("\n=== Boucher sphere, α = 2, R = 50 ===");
    let (alpha, radius) = (2.0_f64, 50.0_f64);
    for &qv in &[0.0_f64, 0.01, 0.05, 0.1, 0.2] {
        let arg = -(qv * radius / 2.0).powi(2);
        println!("q = {qv:<5} A = {:.10}", hyp0f1(0.5 * (alpha + 1.0), arg));
    }

    // -- Bessel and gamma primitives --
    println!("\n=== Primitives ===");
    println!("I_2.5(3)   = {:?}", besseli(2.5, 3.0_f64));
    println!("J_-0.7(3)  = {:?}", besselj(-0.7, 3.0_f64));
    println!("lnΓ(300)   = {:?}", lgamma(300.0_f64));
    println!("J(x < 0)   = {:?}", besselj(1.0, -1.0_f64));

    // -- Direct vs asymptotic --
    println!("\n=== Direct vs asymptotic, c = 100 ===");
    for &z in &[1.0_f64, 10.0, 100.0] {
        let d = hyp0f1(100.0, z);
        let a = hyp0f1_asy(100.0, z);
        println!("z = {z:<5} direct = {d:.15e}  asy = {a:.15e}  rel = {:.1e}", ((d - a) / d).abs());
    }

    // -- f32 --
    println!("\n=== f32 ===");
    println!("0F1(1.5; 0.25) = {}", hyp0f1(1.5_f32, 0.25));
}
