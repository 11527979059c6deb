use scope_tour::statics::{MathTable, demonstrate};

#[test]
fn square_matches_the_product_for_sampled_inputs() {
    for x in [0.0, 1.0, 2.5, 5.0, -3.0, 100.0] {
        assert_eq!(MathTable::square(x), x * x);
    }
}

#[test]
fn square_of_five_is_twenty_five() {
    assert_eq!(MathTable::square(5.0), 25.0);
}

#[test]
fn pi_constant_is_fixed() {
    assert_eq!(MathTable::PI, 3.14159);
}

#[test]
fn demonstration_lines_carry_the_exact_values() {
    let lines = demonstrate();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("3.14159"));
    assert!(lines[1].contains("25.0"));
}
