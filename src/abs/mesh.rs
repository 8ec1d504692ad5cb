//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing interleaved vertex data on the GPU side.
//! The attribute layout of the data is described by a [`VertexLayout`].

use std::{rc::Rc, sync::Arc};

use glow::HasContext;
use lectures_core::geometry::VertexLayout;

fn as_bytes<T: Copy>(data: &[T]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(data.as_ptr() as *const u8, std::mem::size_of_val(data)) }
}

/// A vertex buffer that may be shared by several vertex arrays.
struct VertexBuffer {
    gl: Arc<glow::Context>,
    id: glow::Buffer,
    vertex_count: usize,
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.id);
        }
    }
}

/// Represents a mesh stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: Rc<VertexBuffer>,
    ebo: Option<glow::Buffer>,
    index_count: usize,
}

impl Mesh {
    /// Uploads `vertices` and, if given, `indices`, and records `layout` in a
    /// new vertex array.
    pub fn new(
        gl: &Arc<glow::Context>,
        vertices: &[f32],
        layout: &VertexLayout,
        indices: Option<&[u32]>,
    ) -> Result<Self, String> {
        unsafe {
            let vbo = gl.create_buffer()?;
            let vbo = Rc::new(VertexBuffer {
                gl: Arc::clone(gl),
                id: vbo,
                vertex_count: layout.vertex_count(vertices),
            });
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo.id));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, as_bytes(vertices), glow::STATIC_DRAW);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            let mut mesh = Self::with_buffer(gl, vbo, layout)?;

            if let Some(indices) = indices {
                let ebo = gl.create_buffer()?;
                gl.bind_vertex_array(Some(mesh.vao));
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    as_bytes(indices),
                    glow::STATIC_DRAW,
                );
                gl.bind_vertex_array(None);
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

                mesh.ebo = Some(ebo);
                mesh.index_count = indices.len();
            }

            Ok(mesh)
        }
    }

    /// Creates another vertex array over this mesh's vertex buffer, reading it
    /// through a different `layout`. The buffer lives until every mesh using
    /// it is dropped.
    pub fn share(&self, layout: &VertexLayout) -> Result<Self, String> {
        Self::with_buffer(&self.gl, Rc::clone(&self.vbo), layout)
    }

    fn with_buffer(
        gl: &Arc<glow::Context>,
        vbo: Rc<VertexBuffer>,
        layout: &VertexLayout,
    ) -> Result<Self, String> {
        unsafe {
            let vao = gl.create_vertex_array()?;
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo.id));

            for attribute in layout.attributes {
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    layout.byte_stride(),
                    VertexLayout::byte_offset(attribute),
                );
                gl.enable_vertex_attrib_array(attribute.location);
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                ebo: None,
                index_count: 0,
            })
        }
    }

    /// Draws the mesh as triangles.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl.draw_elements(glow::TRIANGLES, self.index_count as i32, glow::UNSIGNED_INT, 0);
            } else {
                self.gl.draw_arrays(glow::TRIANGLES, 0, self.vbo.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
