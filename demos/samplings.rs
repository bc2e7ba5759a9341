use spacefilling::{generate, DesignSpace, Mode, Variable};

fn main() {
    env_logger::init();

    let space = DesignSpace::new(vec![
        Variable::new("h2o", 1., 6.).with_label("Water").with_unit("ml"),
        Variable::new("dmf", 1., 6.).with_label("DMF").with_unit("ml"),
        Variable::new("temperature", 100., 200.).with_unit("C"),
        Variable::new("power", 150., 250.)
            .with_weight(2.)
            .with_label("Microwave Power")
            .with_unit("W"),
    ])
    .expect("valid design space");

    let n = 20;
    println!("Take {n} samples over:");
    for var in space.variables() {
        println!(
            "  {} in [{}, {}], weight {}",
            var.describe(),
            var.lower(),
            var.upper(),
            var.weight()
        );
    }

    println!("\n*** using uniform random sampling");
    let table = generate(Mode::Uniform, &space, n, 5).expect("uniform sampling");
    println!("{table}");

    println!("*** using weighted maxmin selection over a 5-level grid");
    let table = generate(Mode::Maxmin, &space, n, 5).expect("maxmin sampling");
    println!("{table}");
}
