use std::io::Write;
use tracing::debug;

use crate::testgen::common::Result;
use crate::testgen::ram::RamImage;
use crate::testgen::serialize::writer::RamWriter;

// Fixed template halves of the testbench. The simulation environment expects
// this text verbatim, down to the tab stops in the port map, so it is not
// configurable.
const TB_HEADER: &str = "library ieee;
use ieee.std_logic_1164.all;
use ieee.numeric_std.all;
use ieee.std_logic_unsigned.all;
entity project_tb is
end project_tb;
architecture projecttb of project_tb is
constant c_CLOCK_PERIOD         : time := 15 ns;
signal   tb_done                : std_logic;
signal   mem_address            : std_logic_vector (15 downto 0) := (others => '0');
signal   tb_rst                 : std_logic := '0';
signal   tb_start               : std_logic := '0';
signal   tb_clk                 : std_logic := '0';
signal   mem_o_data,mem_i_data  : std_logic_vector (7 downto 0);
signal   enable_wire            : std_logic;
signal   mem_we                 : std_logic;
type ram_type is array (65535 downto 0) of std_logic_vector(7 downto 0);
signal RAM: ram_type := (
";

const TB_OTHERS: &str = "\t\t\tothers => (others => '0'));\n";

const TB_BODY: &str = "component project_reti_logiche is
port (
      i_clk         : in  std_logic;
      i_rst         : in  std_logic;
      i_start       : in  std_logic;
      i_data        : in  std_logic_vector(7 downto 0);
      o_address     : out std_logic_vector(15 downto 0);
      o_done        : out std_logic;
      o_en          : out std_logic;
      o_we          : out std_logic;
      o_data        : out std_logic_vector (7 downto 0)
      );
end component project_reti_logiche;
begin
UUT: project_reti_logiche
port map (
          i_clk      \t=> tb_clk,
          i_rst      \t=> tb_rst,
          i_start       => tb_start,
          i_data    \t=> mem_o_data,
          o_address  \t=> mem_address,
          o_done      \t=> tb_done,
          o_en   \t=> enable_wire,
          o_we \t\t=> mem_we,
          o_data    \t=> mem_i_data
          );

p_CLK_GEN : process is
begin
    wait for c_CLOCK_PERIOD/2;
    tb_clk <= not tb_clk;
end process p_CLK_GEN;
MEM : process(tb_clk)
begin
    if tb_clk'event and tb_clk = '1' then
        if enable_wire = '1' then
            if mem_we = '1' then
                RAM(conv_integer(mem_address))  <= mem_i_data;
                mem_o_data                      <= mem_i_data after 1 ns;
            else
                mem_o_data <= RAM(conv_integer(mem_address)) after 1 ns;
            end if;
        end if;
    end if;
end process;
test : process is
begin\u{20}
    wait for 100 ns;
    wait for c_CLOCK_PERIOD;
    tb_rst <= '1';
    wait for c_CLOCK_PERIOD;
    wait for 100 ns;
    tb_rst <= '0';
    wait for c_CLOCK_PERIOD;
    wait for 100 ns;
    tb_start <= '1';
    wait for c_CLOCK_PERIOD;
    wait until tb_done = '1';
    wait for c_CLOCK_PERIOD;
    tb_start <= '0';
    wait until tb_done = '0';
    wait for 100 ns;
";

const TB_FOOTER: &str = "    assert false report \"Simulation Ended! TEST PASSATO\" severity failure;
end process test;
end projecttb;
";

/// Emits importable VHDL testbenches for single test cases.
///
/// The full testbench declares a 65536-byte RAM initialized from the image's
/// header and input region (all untouched addresses zero), instantiates the
/// circuit, drives the reset/start sequence, and asserts every working-zone
/// address against the expected equalized value.
///
/// The snippet methods emit only the two copy-pasteable fragments (RAM
/// initializer block and assertion block) for patching an existing Vivado
/// testbench instead of importing a whole file.
pub struct TestbenchWriter;

impl TestbenchWriter {
    /// One `address => value` initializer per header and input-region byte.
    fn write_ram_initializers(image: &RamImage, output: &mut dyn Write) -> Result<()> {
        let initialized = image.pixel_count() + 2;
        for (address, &value) in image.values().iter().take(initialized).enumerate() {
            writeln!(
                output,
                "\t\t\t{address} => std_logic_vector(to_unsigned({value}, 8)),"
            )?;
        }

        Ok(())
    }

    /// One assertion per working-zone address, with the literal failure
    /// message the simulation environment greps for.
    fn write_assertions(image: &RamImage, output: &mut dyn Write) -> Result<()> {
        let base = image.pixel_count() + 2;
        for (offset, &expected) in image.expected().iter().enumerate() {
            let address = base + offset;
            writeln!(
                output,
                "\tassert RAM({address}) = std_logic_vector(to_unsigned({expected}, 8)) \
                 report \"TEST FALLITO (WORKING ZONE). Expected  {expected}  found \" & \
                 integer'image(to_integer(unsigned(RAM({address}))))  severity failure;"
            )?;
        }

        Ok(())
    }

    /// Writes the byte count and the `signal RAM: ram_type := (...)`
    /// initializer block.
    pub fn write_init_snippet(&self, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "{}", image.pixel_count())?;
        output.write_all(b"signal RAM: ram_type := (\n")?;
        Self::write_ram_initializers(image, output)?;
        output.write_all(TB_OTHERS.as_bytes())?;
        output.write_all(b"\n")?;

        Ok(())
    }

    /// Writes the bare working-zone assertion block.
    pub fn write_assertion_snippet(&self, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        Self::write_assertions(image, output)
    }
}

impl RamWriter for TestbenchWriter {
    fn write_case(&self, index: usize, image: &RamImage, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Emitting testbench for test {}: {}x{}, {} RAM bytes",
            index,
            image.width(),
            image.height(),
            image.len()
        );

        output.write_all(TB_HEADER.as_bytes())?;
        Self::write_ram_initializers(image, output)?;
        output.write_all(TB_OTHERS.as_bytes())?;
        output.write_all(TB_BODY.as_bytes())?;
        Self::write_assertions(image, output)?;
        output.write_all(TB_FOOTER.as_bytes())?;

        Ok(())
    }
}
