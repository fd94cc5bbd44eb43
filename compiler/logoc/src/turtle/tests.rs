use super::*;
use pretty_assertions::assert_eq;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn forward_moves_along_heading() {
    let turtle = Turtle::new(1000.0);
    turtle.apply("av", Command::Forward(100.0)).unwrap();
    assert_eq!(turtle.position(), (0.0, 100.0));

    turtle.apply("ga", Command::TurnLeft(90.0)).unwrap();
    turtle.apply("av", Command::Forward(50.0)).unwrap();
    let (x, y) = turtle.position();
    assert!(close(x, -50.0), "x = {x}");
    assert!(close(y, 100.0), "y = {y}");
}

#[test]
fn backward_and_right_turns() {
    let turtle = Turtle::new(1000.0);
    turtle.apply("dr", Command::TurnRight(90.0)).unwrap();
    assert_eq!(turtle.heading(), 270.0);
    turtle.apply("re", Command::Backward(10.0)).unwrap();
    let (x, y) = turtle.position();
    assert!(close(x, -10.0), "x = {x}");
    assert!(close(y, 0.0), "y = {y}");
}

#[test]
fn heading_wraps() {
    let turtle = Turtle::new(1000.0);
    for _ in 0..5 {
        turtle.apply("ga", Command::TurnLeft(90.0)).unwrap();
    }
    assert_eq!(turtle.heading(), 90.0);
}

#[test]
fn commands_are_recorded_in_order() {
    let turtle = Turtle::new(1000.0);
    turtle.apply("vi", Command::SetSpeed(3.0)).unwrap();
    turtle.apply("av", Command::Forward(1.0)).unwrap();
    assert_eq!(
        turtle.commands(),
        vec![Command::SetSpeed(3.0), Command::Forward(1.0)]
    );
    assert_eq!(turtle.speed(), 3.0);
}

#[test]
fn out_of_range_is_rejected_and_not_recorded() {
    let turtle = Turtle::new(100.0);
    assert_eq!(
        turtle.apply("avance", Command::Forward(150.0)),
        Err(ProgramError::OutOfRange {
            name: "avance".to_string(),
            value: 150.0,
            limit: 100.0,
        })
    );
    assert!(turtle.apply("re", Command::Backward(-101.0)).is_err());
    assert!(turtle.apply("av", Command::Forward(f64::NAN)).is_err());
    assert!(turtle.apply("av", Command::Forward(100.0)).is_ok());
    assert_eq!(turtle.commands(), vec![Command::Forward(100.0)]);
}

#[test]
fn command_display() {
    assert_eq!(Command::Forward(10.0).to_string(), "forward 10");
    assert_eq!(Command::TurnLeft(45.5).to_string(), "turn left 45.5");
}
