//! 端到端场景：脚本搭建 → 固定子步推进 → 渲染输出

use glam::{Mat4, Vec3};
use meadow_engine::physics::run_msd_script;
use meadow_engine::skeleton::DofMask;
use meadow_engine::{
    FixedStepper, HermiteSpline, IkRequest, IkSolver, KinematicChain, LiquidSimulation, MassSpringDamper,
    MaterialHandle, MeshHandle, Part, Renderer, SimulationConfig, SplineCursor, TriangleBuffer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 只记录调用的渲染器
#[derive(Default)]
struct Recorder {
    meshes: Vec<(MeshHandle, Mat4)>,
    triangles: usize,
}

impl Renderer for Recorder {
    fn draw(&mut self, mesh: MeshHandle, world: Mat4, _material: MaterialHandle) {
        self.meshes.push((mesh, world));
    }

    fn draw_triangles(&mut self, buffer: &TriangleBuffer, _world: Mat4, _material: MaterialHandle) {
        self.triangles += buffer.triangle_count();
    }
}

const RING: &str = "
    # 边长 1 的水平方环
    create particles 4
    create springs 4
    particle 0 1 0 5 0 0 0 0
    particle 1 1 1 5 0 0 0 0
    particle 2 1 1 5 1 0 0 0
    particle 3 1 0 5 1 0 0 0
    link 0 0 1 5000 10 1
    link 1 1 2 5000 10 1
    link 2 2 3 5000 10 1
    link 3 3 0 5000 10 1
    integration symplectic 0.001
    ground 5000 10
    gravity 9.81
";

#[test]
fn spring_ring_falls_and_comes_to_rest() {
    init_logger();
    let mut msd = MassSpringDamper::with_config(&SimulationConfig::default());
    let dt = run_msd_script(&mut msd, RING).unwrap().unwrap();
    assert_eq!(dt, 0.001);

    // 1 秒自由落体：y ≈ 5 - ½·g
    for _ in 0..1000 {
        msd.update(dt).unwrap();
    }
    for p in msd.particles() {
        assert!(p.position.y > 0.05 && p.position.y < 0.15, "y = {}", p.position.y);
    }
    for s in 0..4 {
        assert!((msd.spring_length(s).unwrap() - 1.0).abs() < 1e-3);
    }

    // 落地后在同一组参数下继续约 11 秒，由地面阻尼耗散到静止
    let mut stepper = FixedStepper::new(dt, 1.0 / 30.0);
    for _ in 0..330 {
        stepper.advance(1.0 / 30.0, |dt| msd.update(dt)).unwrap();
    }
    assert!(stepper.sim_time() > 10.9);
    for p in msd.particles() {
        // 静止穿透深度 mg / ks ≈ 0.00196
        assert!((p.position.y + 0.00196).abs() < 5e-4, "y = {}", p.position.y);
    }
    for s in 0..4 {
        assert!((msd.spring_length(s).unwrap() - 1.0).abs() < 1e-3);
    }
    assert!(msd.kinetic_energy() < 1e-4, "ke = {}", msd.kinetic_energy());
}

#[test]
fn arm_tracks_spline_target() {
    init_logger();
    let mut chain = KinematicChain::new();
    let upper = chain.add_node("upper", Mat4::IDENTITY, Some(Part { mesh: MeshHandle(1), material: MaterialHandle(0) }));
    let lower = chain.add_node("lower", Mat4::IDENTITY, Some(Part { mesh: MeshHandle(2), material: MaterialHandle(0) }));
    let hand = chain.add_node("hand", Mat4::from_translation(Vec3::X), None);
    let shoulder = chain.add_joint("shoulder", None, upper, Mat4::IDENTITY).unwrap();
    let elbow = chain
        .add_joint("elbow", Some(upper), lower, Mat4::from_translation(Vec3::X))
        .unwrap();
    chain.add_joint("wrist", Some(lower), hand, Mat4::IDENTITY).unwrap();
    chain.set_dof(shoulder, DofMask::RZ).unwrap();
    chain.set_dof(elbow, DofMask::RZ).unwrap();
    chain.validate().unwrap();

    let mut path = HermiteSpline::new();
    path.add_point(Vec3::new(1.5, 0.3, 0.0), Vec3::new(-0.9, 1.0, 0.0));
    path.add_point(Vec3::new(0.6, 1.3, 0.0), Vec3::new(-1.2, 0.6, 0.0));
    path.add_point(Vec3::new(-0.8, 1.2, 0.0), Vec3::new(-1.4, -0.1, 0.0));

    let solver = IkSolver::with_config(&SimulationConfig::default())
        .with_gain(0.2)
        .with_null_space_strength(0.0);
    let mut cursor = SplineCursor::default();
    for _ in 0..=10 {
        let (goal, _) = cursor.sample(&path);
        let report = solver.solve(&mut chain, &IkRequest::new(hand, goal), 100).unwrap();
        assert!(report.converged, "goal {goal} not reached: {report:?}");
        assert!(report.position_error < 0.1);
        let tip = chain.node_world_transform(hand, Mat4::IDENTITY).unwrap();
        assert!(tip.w_axis.truncate().distance(goal) < 0.1);
        cursor.u = (cursor.u + 0.1).min(1.0);
    }

    let mut recorder = Recorder::default();
    chain.render(Mat4::IDENTITY, &mut recorder).unwrap();
    assert_eq!(recorder.meshes.len(), 2);
    assert_eq!(recorder.meshes[0].0, MeshHandle(1));
}

#[test]
fn liquid_pipeline_produces_mesh() {
    init_logger();
    let config = SimulationConfig::default();
    let mut liquid = LiquidSimulation::with_rng(&config, StdRng::seed_from_u64(2024));
    liquid.params.spawn_probability = 1.0;
    // 外层时钟按液体子步长切帧，每帧先尝试生成再跑子步
    let mut stepper = FixedStepper::new(liquid.step(), config.max_frame_dt);

    let mut buffer = TriangleBuffer::new(config.triangle_capacity);
    let mut recorder = Recorder::default();
    for _ in 0..30 {
        assert!(liquid.maybe_spawn());
        let steps = stepper
            .advance(1.0 / 30.0, |_| {
                liquid.update();
                Ok(())
            })
            .unwrap();
        // (1/30) / 0.0006 ≈ 55.6
        assert!((55..=57).contains(&steps), "steps = {steps}");
    }
    assert_eq!(liquid.len(), 30);
    assert!(stepper.sim_time() > 0.99);

    let stats = liquid.extract_surface(&mut buffer);
    assert!(stats.written > 0);
    assert_eq!(stats.dropped, 0);
    for p in liquid.particles() {
        assert!(p.position.is_finite());
    }
    let used = buffer.vertex_count();
    assert!(buffer.positions()[..used].iter().all(|p| p.is_finite()));
    assert!(buffer.normals()[..used].iter().all(|n| n.is_finite()));
    assert!(buffer.positions()[used..].iter().all(|p| *p == Vec3::ZERO));

    recorder.draw_triangles(&buffer, Mat4::IDENTITY, MaterialHandle(7));
    assert_eq!(recorder.triangles, stats.written);
}
