/**
 * Generates rust types for the numbering plan schema in /resources.
 * The plan data itself is embedded as protobuf text and decoded at startup.
 */

fn main() {
    println!("cargo:rerun-if-changed=resources/numbering_plan.proto");
    println!("cargo:rerun-if-changed=resources/numbering_plan.txtpb");

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/numbering_plan.proto")
        .cargo_out_dir("proto_gen")
        .run_from_script();
}
