use crate::constants::{
    CLEAR_RGB, RIBBON_RGB, SATELLITE_RGB, SATELLITE_SIZE, TORUS_RADIAL_SEGMENTS,
    TORUS_TUBULAR_SEGMENTS,
};
use folio_core::{RibbonSpec, Satellite, SceneFrame, SceneRig};
use glam::{Mat4, Vec3, Vec4};
use web_sys as web;

mod helpers;
pub mod mesh;
pub mod surface;

use helpers::GpuMesh;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    eye_time: [f32; 4],
    clear: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],    // rgb + distortion
    emissive: [f32; 4], // rgb + intensity
}

impl InstanceRaw {
    fn new(model: Mat4, color: Vec4, emissive: Vec4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
            emissive: emissive.to_array(),
        }
    }
}

// Core glow so the hover colour reads even without transmission.
const CORE_EMISSIVE: f32 = 0.15;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instances: Vec<InstanceRaw>,

    core_mesh: GpuMesh,
    ribbon_meshes: Vec<GpuMesh>,
    satellite_mesh: GpuMesh,
    ribbons: [RibbonSpec; 3],
    satellites: Vec<Satellite>,

    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Geometry for the rig's ribbons and satellites is built once here.
    pub async fn new(canvas: &'a web::HtmlCanvasElement, rig: &SceneRig) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[helpers::vertex_layout(), helpers::instance_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let ribbons = *rig.ribbons();
        let satellites = rig.satellites().to_vec();
        let instance_capacity = 1 + ribbons.len() + satellites.len();
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_instances"),
            size: (std::mem::size_of::<InstanceRaw>() * instance_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let core_mesh = helpers::upload_mesh(&device, "core_mesh", &mesh::octahedron(1.0));
        let ribbon_meshes = ribbons
            .iter()
            .map(|r| {
                helpers::upload_mesh(
                    &device,
                    "ribbon_mesh",
                    &mesh::torus(
                        r.radius,
                        r.width,
                        TORUS_RADIAL_SEGMENTS,
                        TORUS_TUBULAR_SEGMENTS,
                    ),
                )
            })
            .collect();
        let satellite_mesh =
            helpers::upload_mesh(&device, "satellite_mesh", &mesh::cube(SATELLITE_SIZE));

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        log::info!("[gpu] ready {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            globals_bg,
            instance_buffer,
            instances: Vec::with_capacity(instance_capacity),
            core_mesh,
            ribbon_meshes,
            satellite_mesh,
            ribbons,
            satellites,
            depth_tex,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    /// Recreate the swap chain at the current size after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    fn build_instances(&mut self, scene: &SceneFrame) {
        let obj = &scene.object;
        let mat = &scene.material;
        let group =
            Mat4::from_scale_rotation_translation(Vec3::splat(obj.scale), obj.rotation(), Vec3::ZERO);

        self.instances.clear();
        let core = group
            * Mat4::from_euler(glam::EulerRot::XYZ, scene.core_spin.x, scene.core_spin.y, 0.0);
        self.instances.push(InstanceRaw::new(
            core,
            Vec4::from((mat.color.0, mat.distortion)),
            Vec4::from((mat.color.0, CORE_EMISSIVE)),
        ));

        for (spec, angle) in self.ribbons.iter().zip(scene.ribbon_angles) {
            let model = group
                * Mat4::from_quat(spec.mount)
                * Mat4::from_axis_angle(spec.spin_axis.unit(), angle);
            self.instances.push(InstanceRaw::new(
                model,
                Vec4::from((Vec3::from(RIBBON_RGB), 0.0)),
                Vec4::from((mat.emissive_color.0, mat.emissive_intensity)),
            ));
        }

        let cluster = group * Mat4::from_rotation_y(scene.satellite_yaw);
        for s in &self.satellites {
            self.instances.push(InstanceRaw::new(
                cluster * Mat4::from_rotation_translation(s.rotation, s.position),
                Vec4::from((Vec3::from(SATELLITE_RGB), 0.0)),
                Vec4::ZERO,
            ));
        }
    }

    pub fn render(&mut self, scene: &SceneFrame, elapsed_sec: f32) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = scene.camera.camera(aspect);
        let globals = Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye_time: [camera.eye.x, camera.eye.y, camera.eye.z, elapsed_sec],
            clear: [
                self.clear_color.r as f32,
                self.clear_color.g as f32,
                self.clear_color.b as f32,
                1.0,
            ],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.build_instances(scene);
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            let mut first = 0u32;
            draw_mesh(&mut rpass, &self.core_mesh, first..first + 1);
            first += 1;
            for m in &self.ribbon_meshes {
                draw_mesh(&mut rpass, m, first..first + 1);
                first += 1;
            }
            let n = self.satellites.len() as u32;
            draw_mesh(&mut rpass, &self.satellite_mesh, first..first + n);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_mesh(rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, instances: std::ops::Range<u32>) {
    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    rpass.draw_indexed(0..mesh.index_count, 0, instances);
}
